//! JavaScript identifier naming.

use stone_core::to_camel_case;

/// Name of the stub for a route: the namespace and route names joined and
/// converted to lower camel case.
///
/// Distinct routes may map to the same name; no collision check is made.
pub fn function_name(namespace: &str, route: &str) -> String {
    to_camel_case(&format!("{namespace}_{route}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_name() {
        assert_eq!(function_name("files", "list"), "filesList");
        assert_eq!(
            function_name("files", "list_folder/continue"),
            "filesListFolderContinue"
        );
        assert_eq!(function_name("users", "get_account_batch"), "usersGetAccountBatch");
        assert_eq!(function_name("team_log", "get_events"), "teamLogGetEvents");
        assert_eq!(function_name("sharing", "getURL"), "sharingGetUrl");
    }

    #[test]
    fn test_function_name_collisions_not_detected() {
        assert_eq!(function_name("a_b", "c"), function_name("a", "b_c"));
    }
}
