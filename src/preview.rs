/// Which certificate image, if any, is open in the preview modal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CertificatePreview {
    image: Option<&'static str>,
}

impl CertificatePreview {
    /// Opening replaces whatever is currently shown.
    #[must_use]
    pub fn open(self, image: &'static str) -> Self {
        Self { image: Some(image) }
    }

    #[must_use]
    pub fn close(self) -> Self {
        Self { image: None }
    }

    pub fn image(&self) -> Option<&'static str> {
        self.image
    }

    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CERTIFICATES;

    #[test]
    fn clicking_an_entry_opens_its_image() {
        let preview = CertificatePreview::default().open(CERTIFICATES[0].image);
        assert_eq!(preview.image(), Some("/certificates/python.png"));
    }

    #[test]
    fn close_clears_the_preview() {
        let preview = CertificatePreview::default()
            .open(CERTIFICATES[0].image)
            .close();
        assert_eq!(preview.image(), None);
        assert!(!preview.is_open());
    }

    #[test]
    fn second_click_replaces_instead_of_stacking() {
        let preview = CertificatePreview::default()
            .open(CERTIFICATES[0].image)
            .open(CERTIFICATES[3].image);
        assert_eq!(preview.image(), Some(CERTIFICATES[3].image));
        assert_eq!(preview.close(), CertificatePreview::default());
    }
}
