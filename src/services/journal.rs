use crate::error::{KraiseError, Result};
use crate::filters::FilterArgs;
use crate::windows::{format_window_list, WindowId};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Журнал вызовов: по одному блоку на каждый запуск, только дозапись
pub struct Journal {
    path: PathBuf,
    file: File,
}

impl Journal {
    /// Открывает (создаёт при отсутствии) файл журнала на дозапись
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .mode(0o644)
            .open(&path)
            .map_err(|source| KraiseError::LogOpen {
                path: path.clone(),
                source,
            })?;

        debug!("Журнал открыт: {:?}", path);
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Записывает блок с параметрами вызова и оставшимися кандидатами
    pub fn record_invocation(
        &mut self,
        active: &WindowId,
        filters: &FilterArgs,
        remaining: &[WindowId],
    ) {
        let entry = format_entry(active, filters, remaining);
        self.append(&entry);
    }

    pub fn record_no_match(&mut self) {
        self.append("No match\n");
    }

    // Запись в журнал не критична: ошибка только логируется
    fn append(&mut self, text: &str) {
        if let Err(e) = self.try_append(text) {
            warn!("Не удалось записать в журнал {:?}: {}", self.path, e);
        }
    }

    fn try_append(&mut self, text: &str) -> Result<()> {
        self.file.write_all(text.as_bytes())?;
        self.file.flush()?;
        Ok(())
    }
}

fn format_entry(active: &WindowId, filters: &FilterArgs, remaining: &[WindowId]) -> String {
    format!(
        "\nactive_window={}\nwmclass={}\ntitle={}\nexclude_title={}\nrun={}\nremaining={}\n",
        active,
        filters.wmclass,
        filters.title,
        filters.exclude_title,
        filters.run,
        format_window_list(remaining)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn sample_filters() -> FilterArgs {
        FilterArgs {
            wmclass: "firefox".to_string(),
            title: String::new(),
            exclude_title: "Private".to_string(),
            run: "firefox --new-window".to_string(),
        }
    }

    #[test]
    fn test_entry_format() {
        let entry = format_entry(
            &WindowId::from("{a}"),
            &sample_filters(),
            &[WindowId::from("{a}"), WindowId::from("{b}")],
        );
        assert_eq!(
            entry,
            "\nactive_window={a}\nwmclass=firefox\ntitle=\nexclude_title=Private\nrun=firefox --new-window\nremaining=[{a} {b}]\n"
        );
    }

    #[test]
    fn test_open_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kraise.log");

        {
            let mut journal = Journal::open(&path).unwrap();
            journal.record_invocation(&WindowId::from("1"), &FilterArgs::default(), &[]);
            journal.record_no_match();
        }
        {
            let mut journal = Journal::open(&path).unwrap();
            assert_eq!(journal.path(), path.as_path());
            journal.record_invocation(&WindowId::from("2"), &FilterArgs::default(), &[]);
        }

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "\nactive_window=1\nwmclass=\ntitle=\nexclude_title=\nrun=\nremaining=[]\nNo match\n\
             \nactive_window=2\nwmclass=\ntitle=\nexclude_title=\nrun=\nremaining=[]\n"
        );
    }

    #[test]
    fn test_open_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("kraise.log");
        let err = Journal::open(&path).err().unwrap();
        assert!(matches!(err, KraiseError::LogOpen { .. }));
    }
}
