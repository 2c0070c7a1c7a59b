/// Network adapters for the BOM web API
mod http_record_source;

pub use http_record_source::HttpRecordSource;
