/// What the user chose to remove once they agreed to uninstall something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninstallOption {
    /// Every orphaned package (menu entry 1)
    All,
    /// Packages picked by name (menu entry 2)
    Specific,
}

impl std::str::FromStr for UninstallOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(UninstallOption::All),
            "2" => Ok(UninstallOption::Specific),
            other => Err(format!("Invalid option: {}", other)),
        }
    }
}
