label_enum! {
    /// Whether a listing is a curated dashboard or a self-service explore
    EntryKind, "entry type" {
        Dashboard => "Dashboard",
        Explore => "Explore",
    }
}

label_enum! {
    /// Deployment environment a listing is published to
    Environment, "environment" {
        Production => "Production",
        Qa => "QA",
        Dev => "Dev",
        Sandbox => "Sandbox",
        Archived => "Archived",
    }
}

label_enum! {
    /// Access level shown next to a listing (display-only, never enforced)
    Access, "access level" {
        Viewer => "Viewer",
        Editor => "Editor",
        Admin => "Admin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("qa".parse::<Environment>().unwrap(), Environment::Qa);
        assert_eq!(" Explore ".parse::<EntryKind>().unwrap(), EntryKind::Explore);
        assert_eq!("ADMIN".parse::<Access>().unwrap(), Access::Admin);
    }

    #[test]
    fn test_parse_unknown_label() {
        let err = "Staging".parse::<Environment>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown environment: 'Staging'");
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&Environment::Qa).unwrap();
        assert_eq!(json, "\"QA\"");
        let back: Environment = serde_json::from_str("\"Sandbox\"").unwrap();
        assert_eq!(back, Environment::Sandbox);
    }
}
