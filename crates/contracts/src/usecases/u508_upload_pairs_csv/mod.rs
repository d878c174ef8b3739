pub mod error;
pub mod parser;
pub mod ports;
pub mod response;
pub mod row;
pub mod session;

pub use error::UploadError;
pub use parser::parse_rows;
pub use ports::{RowsTransport, TextSource};
pub use response::{decode_response_body, PairsResponse};
pub use row::{RowRecord, EXPECTED_COLUMNS};
pub use session::{run_upload, UploadSession};

use crate::usecases::common::UseCaseMetadata;

pub struct UploadPairsCsv;

impl UseCaseMetadata for UploadPairsCsv {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "upload_pairs_csv"
    }

    fn display_name() -> &'static str {
        "Распределение пар из CSV"
    }

    fn description() -> &'static str {
        "Загрузка списка студентов из CSV и отправка в сервис подбора пар"
    }
}
