pub mod common;
pub mod u508_upload_pairs_csv;
