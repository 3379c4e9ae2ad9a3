use crate::banner::{BannerKind, BannerRequest};

pub const DEFAULT_RESUME_PATH: &str = "./assets/Gulshan_Kumar_Resume.pdf";
pub const DOWNLOAD_STARTED_MESSAGE: &str = "CV download started!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadLink {
    pub href: String,
    pub filename: String,
}

impl DownloadLink {
    /// The saved file takes the last path segment of `href`.
    pub fn for_path(href: &str) -> Self {
        let filename = href
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
            .unwrap_or("resume.pdf");

        Self {
            href: href.to_string(),
            filename: filename.to_string(),
        }
    }
}

pub fn download_started() -> BannerRequest {
    BannerRequest::new(BannerKind::Info, DOWNLOAD_STARTED_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_resume_link_keeps_file_name() {
        let link = DownloadLink::for_path(DEFAULT_RESUME_PATH);

        assert_eq!(link.href, "./assets/Gulshan_Kumar_Resume.pdf");
        assert_eq!(link.filename, "Gulshan_Kumar_Resume.pdf");
    }

    #[test]
    fn trailing_slash_falls_back_to_generic_name() {
        assert_eq!(DownloadLink::for_path("/files/").filename, "resume.pdf");
        assert_eq!(DownloadLink::for_path("cv.pdf").filename, "cv.pdf");
    }

    #[test]
    fn download_banner_is_informational() {
        let banner = download_started();

        assert_eq!(banner.kind, BannerKind::Info);
        assert_eq!(banner.message, DOWNLOAD_STARTED_MESSAGE);
    }
}
