use std::path::{Path, PathBuf};

/// Maps `source` under `input_root` to the same relative location under
/// `output_root`, with its extension replaced by `extension`.
///
/// A `source` outside `input_root` keeps only its file name.
pub fn destination_path(
    input_root: &Path,
    output_root: &Path,
    source: &Path,
    extension: &str,
) -> PathBuf {
    let relative = match source.strip_prefix(input_root) {
        Ok(relative) => relative,
        Err(_) => source.file_name().map(Path::new).unwrap_or(source),
    };
    output_root.join(relative).with_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/in/a/x.xnb", "/out/a/x.png")]
    #[case("/in/x.xnb", "/out/x.png")]
    #[case("/in/a/b/c/Hero.Idle.xnb", "/out/a/b/c/Hero.Idle.png")]
    #[case("/elsewhere/y.xnb", "/out/y.png")]
    fn mirrors_relative_path(#[case] source: &str, #[case] expected: &str) {
        let destination =
            destination_path(Path::new("/in"), Path::new("/out"), Path::new(source), "png");
        assert_eq!(destination, PathBuf::from(expected));
    }

    #[test]
    fn same_root_writes_alongside_source() {
        let destination = destination_path(
            Path::new("/content"),
            Path::new("/content"),
            Path::new("/content/ui/button.xnb"),
            "png",
        );
        assert_eq!(destination, PathBuf::from("/content/ui/button.png"));
    }
}
