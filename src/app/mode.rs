#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Editing,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appmode_variants_exist() {
        let _mode = AppMode::Editing;
        let _mode = AppMode::Quit;
    }
}
