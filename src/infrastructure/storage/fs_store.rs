use crate::domain::storage::{Storage, StorageKeys};
use crate::domain::{CountryScoreRecord, Manifest, RawIndicators};
use crate::error::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub struct FileSystemStore {
    data_dir: PathBuf,
    cache_dir: PathBuf,
    // serializes read-modify-write of the record file
    records_lock: Mutex<()>,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            cache_dir: cache_dir.into(),
            records_lock: Mutex::new(()),
        }
    }

    fn get_path_for_key(&self, key: &str, subdir: Option<&str>, use_data_dir: bool) -> PathBuf {
        let base_dir = if use_data_dir {
            &self.data_dir
        } else {
            &self.cache_dir
        };

        if let Some(dir) = subdir {
            base_dir.join(dir).join(format!("{}.json", key))
        } else {
            base_dir.join(format!("{}.json", key))
        }
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(
        &self,
        key: &str,
        subdir: Option<&str>,
        data: &T,
        use_data_dir: bool,
    ) -> Result<()> {
        let path = self.get_path_for_key(key, subdir, use_data_dir);
        if let Some(parent) = path.parent() {
            self.ensure_dir(parent)?;
        }

        // readers see either the old file or the new one, never a partial write
        let content = serde_json::to_string_pretty(data)?;
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
        subdir: Option<&str>,
        use_data_dir: bool,
    ) -> Result<Option<T>> {
        let path = self.get_path_for_key(key, subdir, use_data_dir);
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }
}

impl Storage for FileSystemStore {
    fn load_indicators(&self, iso3: &str) -> Result<Option<RawIndicators>> {
        self.read_json_file(iso3, Some(StorageKeys::INDICATORS_DIR), false)
    }

    fn save_indicators(&self, iso3: &str, indicators: &RawIndicators) -> Result<()> {
        self.write_json_file(iso3, Some(StorageKeys::INDICATORS_DIR), indicators, false)
    }

    fn load_records(&self) -> Result<Vec<CountryScoreRecord>> {
        Ok(self
            .read_json_file(StorageKeys::COUNTRY_SCORES, None, true)?
            .unwrap_or_default())
    }

    fn upsert_records(&self, records: &[CountryScoreRecord]) -> Result<usize> {
        let _guard = self
            .records_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut by_iso3: BTreeMap<String, CountryScoreRecord> = self
            .load_records()?
            .into_iter()
            .map(|record| (record.basic.iso3.clone(), record))
            .collect();

        for record in records {
            by_iso3.insert(record.basic.iso3.clone(), record.clone());
        }

        let merged: Vec<CountryScoreRecord> = by_iso3.into_values().collect();
        self.write_json_file(StorageKeys::COUNTRY_SCORES, None, &merged, true)?;
        Ok(merged.len())
    }

    fn save_manifest(&self, manifest: &Manifest) -> Result<()> {
        self.write_json_file(
            StorageKeys::MANIFEST,
            None,
            manifest,
            true, // Use data_dir
        )
    }
}
