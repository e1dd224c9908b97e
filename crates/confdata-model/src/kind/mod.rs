mod data_type;
pub use data_type::DataType;

mod conversion;
pub use conversion::Conversion;
