use heatmapcore::{parse_payload, DatasetRecord, FetchError};
use log::info;
use std::fs;
use std::path::Path;

/// Downloads and decodes the monthly variance payload. Never retries.
pub async fn fetch_dataset(url: &str) -> Result<Vec<DatasetRecord>, FetchError> {
    info!("fetching dataset from {}", url);
    let response = reqwest::get(url)
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;
    parse_payload(&body)
}

/// Reads the same payload from disk.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<DatasetRecord>, FetchError> {
    let path_ref = path.as_ref();
    let body = fs::read_to_string(path_ref)
        .map_err(|e| FetchError::Io(format!("{}: {}", path_ref.display(), e)))?;
    parse_payload(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_dataset_reads_payload_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            br#"{"baseTemperature":8.66,"monthlyVariance":[{"year":1753,"month":1,"variance":-1.366}]}"#,
        )
        .unwrap();
        let records = load_dataset(temp.path()).unwrap();
        assert_eq!(records, vec![DatasetRecord::new(1753, 1, -1.366)]);
    }

    #[test]
    fn missing_file_is_an_io_failure() {
        let err = load_dataset("does/not/exist.json").unwrap_err();
        assert!(matches!(err, FetchError::Io(_)));
    }

    #[test]
    fn garbage_file_is_malformed() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"<html>rate limited</html>").unwrap();
        assert!(matches!(
            load_dataset(temp.path()),
            Err(FetchError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_failure() {
        let err = fetch_dataset("http://127.0.0.1:1/global-temperature.json")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }
}
