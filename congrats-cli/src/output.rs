use std::{fs, path::Path};

/// Write the congratulation verbatim, replacing any existing file.
pub fn save_text(path: &Path, text: &str) -> anyhow::Result<()> {
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::output::save_text;

    #[test]
    fn writes_exactly_the_given_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("congratulation.txt");

        save_text(&path, "Happy birthday, Alice! 🎉").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Happy birthday, Alice! 🎉");
    }

    #[test]
    fn overwrites_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("congratulation.txt");
        fs::write(&path, "stale content from a previous run").unwrap();

        save_text(&path, "fresh").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }
}
