pub mod u508_upload_pairs_csv;
