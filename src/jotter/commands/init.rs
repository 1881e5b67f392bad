use crate::commands::{CmdMessage, CmdResult, JotterPaths};
use crate::error::Result;
use std::fs;

pub fn run(paths: &JotterPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized jotter store at {}",
        paths.data_dir.display()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_data_dir() {
        let dir = TempDir::new().unwrap();
        let paths = JotterPaths {
            data_dir: dir.path().join("store"),
        };
        run(&paths).unwrap();
        assert!(paths.data_dir.is_dir());
    }
}
