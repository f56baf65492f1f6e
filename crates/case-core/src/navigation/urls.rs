use case_domain::CaseId;

/// Construcción pura de URLs de un flujo montado bajo `prefix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlScheme {
    prefix: String,
}

impl UrlScheme {
    /// `prefix` sin barra final; `"/"` o `""` montan el flujo en la raíz.
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.trim_end_matches('/').to_string() }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn index_url(&self) -> String {
        format!("{}/", self.prefix)
    }

    pub fn case_url(&self, case_id: CaseId) -> String {
        format!("{}/{}/", self.prefix, case_id)
    }

    pub fn page_url(&self, case_id: CaseId, slug: &str) -> String {
        format!("{}/{}/{}/", self.prefix, case_id, slug)
    }

    /// Un slug ausente (límite del flujo) produce una URL ausente.
    pub fn maybe_page_url(&self, case_id: CaseId, slug: Option<&str>) -> Option<String> {
        slug.map(|s| self.page_url(case_id, s))
    }

    pub fn print_url(&self, case_id: CaseId) -> String {
        self.page_url(case_id, "print")
    }

    pub fn download_url(&self, case_id: CaseId) -> String {
        self.page_url(case_id, "download")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_under_the_prefix() {
        let id = CaseId::new();
        let urls = UrlScheme::new("/evaluation/");
        assert_eq!(urls.index_url(), "/evaluation/");
        assert_eq!(urls.case_url(id), format!("/evaluation/{id}/"));
        assert_eq!(urls.print_url(id), format!("/evaluation/{id}/print/"));
        assert_eq!(urls.maybe_page_url(id, None), None);
        assert_eq!(UrlScheme::new("/").index_url(), "/");
    }
}
