//! Structural checks keeping `tests/unit` a mirror of `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    // Module wiring and entry points carry no logic of their own
    fn is_exempt(relative: &str) -> bool {
        relative == "lib.rs" || relative == "main.rs" || relative.ends_with("mod.rs")
    }

    /// Relative paths of every directory and `.rs` file below `root`
    fn mirror_paths(root: &Path) -> io::Result<BTreeSet<String>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(|error| io::Error::other(error.to_string()))?
                    .to_string_lossy()
                    .replace('\\', "/");

                if path.is_dir() {
                    found.insert(relative);
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn listing(paths: &[&String], describe: impl Fn(&str) -> String) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", describe(path)))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_source_file_has_unit_tests() -> io::Result<()> {
        let sources = mirror_paths(Path::new(SRC))?;
        let units = mirror_paths(Path::new(UNIT))?;

        let missing: Vec<&String> = sources
            .iter()
            .filter(|path| !is_exempt(path) && !units.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "Source paths without a unit test counterpart:\n{}",
            listing(&missing, |path| format!("src/{path} -> {UNIT}/{path}"))
        );
        Ok(())
    }

    #[test]
    fn test_every_unit_test_has_a_source() -> io::Result<()> {
        let sources = mirror_paths(Path::new(SRC))?;
        let units = mirror_paths(Path::new(UNIT))?;

        let orphaned: Vec<&String> = units
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test paths with no matching source:\n{}",
            listing(&orphaned, |path| format!("{UNIT}/{path} -> src/{path} (missing)"))
        );
        Ok(())
    }

    #[test]
    fn test_every_test_file_declares_tests() -> io::Result<()> {
        let root = Path::new("tests");
        let mut empty = Vec::new();

        for relative in mirror_paths(root)? {
            let path = root.join(&relative);
            if path.is_dir() || relative.ends_with("mod.rs") {
                continue;
            }
            if !fs::read_to_string(&path)?.contains("#[test]") {
                empty.push(relative);
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty
                .iter()
                .map(|path| format!("  - tests/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
        Ok(())
    }
}
