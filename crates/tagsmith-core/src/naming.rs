/// Reports whether a type name is exported: the last `.`-separated segment
/// must start with an uppercase letter.
pub fn is_exported(name: &str) -> bool {
    let local = name.rsplit('.').next().unwrap_or(name);
    local.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::is_exported;

    #[test]
    fn exported_names_start_uppercase() {
        assert!(is_exported("Celsius"));
        assert!(is_exported("models.Account"));
        assert!(!is_exported("celsius"));
        assert!(!is_exported("models.account"));
        assert!(!is_exported(""));
    }
}
