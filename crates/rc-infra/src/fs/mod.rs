mod password_file;

pub use password_file::FsPasswordFile;
