use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DataPath {
    base: PathBuf,
}

impl DataPath {
    pub fn new(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref().to_path_buf();
        Self { base }
    }

    pub fn default_base() -> Option<PathBuf> {
        dirs::data_local_dir().map(|pb| pb.join("herdbook"))
    }

    pub fn default_base_or_cwd() -> PathBuf {
        Self::default_base().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn rel_path(&self, typ: DataPathType) -> PathBuf {
        match typ {
            DataPathType::Log => PathBuf::from("logs"),
            DataPathType::Setting => PathBuf::from("settings"),
            DataPathType::Events => PathBuf::from("events"),
        }
    }

    pub fn path(&self, typ: DataPathType) -> PathBuf {
        self.base.join(self.rel_path(typ))
    }

    /// Where the calendar settings live.
    pub fn calendar_config(&self) -> PathBuf {
        self.path(DataPathType::Setting).join("calendar.json")
    }

    /// Event file picked up when no `--events` flag is given.
    pub fn events_file(&self) -> PathBuf {
        self.path(DataPathType::Events).join("events.json")
    }
}

impl Default for DataPath {
    fn default() -> Self {
        Self::new(Self::default_base_or_cwd())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataPathType {
    Log,
    Setting,
    Events,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paths_hang_off_the_base() {
        let path = DataPath::new("/tmp/herd");
        assert_eq!(path.path(DataPathType::Log), PathBuf::from("/tmp/herd/logs"));
        assert_eq!(
            path.calendar_config(),
            PathBuf::from("/tmp/herd/settings/calendar.json")
        );
    }
}
