use super::error::ApiError;

/// Path of the project resource itself (target of DELETE)
pub fn project_path(project: &str) -> Result<String, ApiError> {
    if project.trim().is_empty() {
        return Err(ApiError::InvalidProjectId);
    }
    Ok(format!("/project/{}", urlencoding::encode(project)))
}

/// Path of the status endpoint for a project
pub fn status_path(project: &str) -> Result<String, ApiError> {
    Ok(format!("{}/status", project_path(project)?))
}

/// Join a sanitized base URL with an absolute path
pub fn absolute_url(base_url: &str, path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return base_url.to_string();
    }
    format!("{}/{}", base_url, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_path_plain_id() {
        assert_eq!(status_path("clojure-koans").unwrap(), "/project/clojure-koans/status");
    }

    #[test]
    fn test_project_path_encodes_opaque_id() {
        assert_eq!(project_path("a b/c").unwrap(), "/project/a%20b%2Fc");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(matches!(status_path("  "), Err(ApiError::InvalidProjectId)));
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(absolute_url("http://h:1", "/project/x"), "http://h:1/project/x");
        assert_eq!(absolute_url("http://h:1", "/"), "http://h:1");
    }
}
