mod file_tld_repository;

pub use file_tld_repository::FileTldRepository;
