use std::path::Path;

use color_match::{
    Color, ColorSpace, MatchEngine, MatchOutcome, MatchRequest, Palette, Srgb, Summarizer,
};

use crate::error::AppError;
use crate::models::AppConfig;

/// Per-call overrides of the configured defaults.
///
/// Every field left as `None` falls back to the configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchOverrides {
    pub space: Option<ColorSpace>,
    pub summarizer: Option<Summarizer>,
    pub clusters: Option<usize>,
    /// `Some(None)` disables resizing
    pub resize_to: Option<Option<u32>>,
    pub max_distance: Option<f64>,
    pub seed: Option<u64>,
}

/// Owns the palette engine built from configuration at startup.
///
/// The engine is immutable, so a `MatchService` can be shared by reference
/// between threads.
pub struct MatchService {
    config: AppConfig,
    engine: MatchEngine,
}

impl MatchService {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let palette = config.palette.build()?;
        let entries = palette.len();
        let engine = MatchEngine::new(palette)?;
        tracing::info!(entries, palette = %config.palette, "Palette ready");
        Ok(Self { config, engine })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        self.engine.palette()
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Combine configured defaults with `overrides`.
    ///
    /// The distance limit follows the effective space unless given
    /// explicitly. Cluster count and seed only affect the k-means summarizer;
    /// asking for clusters with no summarizer selected implies k-means, while
    /// an explicitly selected mean summarizer stays the mean.
    pub fn request(&self, overrides: &MatchOverrides) -> MatchRequest {
        let config = &self.config;
        let space = overrides.space.unwrap_or(config.default_space);

        let summarizer = match (overrides.summarizer, overrides.clusters) {
            (Some(summarizer), _) => config.apply_kmeans_settings(summarizer),
            (None, Some(_)) => config.apply_kmeans_settings(Summarizer::Dominant(Default::default())),
            (None, None) => config.summarizer(),
        };

        let mut request = MatchRequest::new()
            .space(space)
            .summarizer(summarizer)
            .resize_to(overrides.resize_to.unwrap_or(config.resize_to))
            .max_distance(
                overrides
                    .max_distance
                    .unwrap_or_else(|| config.max_distances.get(space)),
            );
        if let (Some(clusters), Summarizer::Dominant(_)) = (overrides.clusters, summarizer) {
            request = request.clusters(clusters);
        }
        if let Some(seed) = overrides.seed {
            request = request.seed(Some(seed));
        }
        request
    }

    pub fn match_bytes(
        &self,
        bytes: &[u8],
        request: &MatchRequest,
    ) -> Result<MatchOutcome, AppError> {
        Ok(self.engine.match_bytes(bytes, request)?)
    }

    pub fn match_file(&self, path: &Path, request: &MatchRequest) -> Result<MatchOutcome, AppError> {
        let bytes = read_image(path)?;
        let outcome = self.match_bytes(&bytes, request)?;
        tracing::debug!(path = %path.display(), ?outcome, "Matched image");
        Ok(outcome)
    }

    pub fn summarize_file(&self, path: &Path, request: &MatchRequest) -> Result<Srgb, AppError> {
        let bytes = read_image(path)?;
        Ok(self.engine.summarize(&bytes, request)?)
    }

    /// Match a hex color directly, without an image.
    pub fn match_hex(&self, hex: &str, request: &MatchRequest) -> Result<MatchOutcome, AppError> {
        let color: Srgb = hex.parse().map_err(|e: color_match::ParseColorError| {
            AppError::InvalidColor {
                input: hex.to_string(),
                message: e.to_string(),
            }
        })?;
        Ok(self.engine.match_color(
            Color::from(color),
            request.get_space(),
            request.effective_max_distance(),
        )?)
    }
}

fn read_image(path: &Path) -> Result<Vec<u8>, AppError> {
    std::fs::read(path).map_err(|source| AppError::ReadImage {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_match::KmeansOptions;
    use pretty_assertions::assert_eq;

    fn service(yaml: &str) -> MatchService {
        MatchService::new(AppConfig::from_yaml_str(yaml).unwrap()).unwrap()
    }

    #[test]
    fn test_default_request() {
        let service = service("");
        let request = service.request(&MatchOverrides::default());
        assert_eq!(request, service.config().default_request());
        assert_eq!(request.effective_max_distance(), 0.2);
    }

    #[test]
    fn test_space_override_moves_limit() {
        let service = service("max_distances:\n  lab: 15\n");
        let request = service.request(&MatchOverrides {
            space: Some(ColorSpace::Lab),
            ..Default::default()
        });
        assert_eq!(request.get_space(), ColorSpace::Lab);
        assert_eq!(request.effective_max_distance(), 15.0);

        let request = service.request(&MatchOverrides {
            space: Some(ColorSpace::Lab),
            max_distance: Some(3.0),
            ..Default::default()
        });
        assert_eq!(request.effective_max_distance(), 3.0);
    }

    #[test]
    fn test_kmeans_overrides() {
        let service = service("clusters: 4\nseed: 7\n");

        let request = service.request(&MatchOverrides {
            summarizer: Some(Summarizer::Dominant(KmeansOptions::default())),
            ..Default::default()
        });
        assert_eq!(
            request.get_summarizer(),
            &Summarizer::Dominant(KmeansOptions {
                clusters: 4,
                max_iterations: 10,
                seed: Some(7),
            })
        );

        // Clusters alone imply k-means; the seed override wins over config
        let request = service.request(&MatchOverrides {
            clusters: Some(2),
            seed: Some(99),
            ..Default::default()
        });
        assert_eq!(
            request.get_summarizer(),
            &Summarizer::Dominant(KmeansOptions {
                clusters: 2,
                max_iterations: 10,
                seed: Some(99),
            })
        );
    }

    #[test]
    fn test_explicit_mean_ignores_clusters() {
        let kmeans_default = service("default_summarizer: kmeans\n");
        let request = kmeans_default.request(&MatchOverrides {
            summarizer: Some(Summarizer::Mean),
            clusters: Some(3),
            seed: Some(5),
            ..Default::default()
        });
        assert_eq!(request.get_summarizer(), &Summarizer::Mean);

        // Clusters without a summarizer still switch a mean default to k-means
        let mean_default = service("");
        let request = mean_default.request(&MatchOverrides {
            clusters: Some(3),
            ..Default::default()
        });
        assert_eq!(request.get_summarizer().name(), "kmeans");
    }

    #[test]
    fn test_resize_override() {
        let service = service("");
        let request = service.request(&MatchOverrides {
            resize_to: Some(None),
            ..Default::default()
        });
        assert_eq!(request.get_resize_to(), None);
    }

    #[test]
    fn test_match_hex() {
        let service = service("palette: html4");
        let request = service.request(&MatchOverrides::default());

        let outcome = service.match_hex("#000080", &request).unwrap();
        assert_eq!(outcome.name(), Some("navy"));
        assert_eq!(outcome.distance(), 0.0);

        let err = service.match_hex("#00008", &request).unwrap_err();
        assert!(matches!(err, AppError::InvalidColor { .. }));
    }

    #[test]
    fn test_match_file_missing() {
        let service = service("palette: html4");
        let request = service.request(&MatchOverrides::default());
        let err = service
            .match_file(Path::new("/nonexistent/image.png"), &request)
            .unwrap_err();
        assert!(matches!(err, AppError::ReadImage { .. }));
    }

    #[test]
    fn test_invalid_palette_is_fatal() {
        let config = AppConfig::from_yaml_str("palette:\n  bogus: not-a-hex-color\n").unwrap();
        let err = MatchService::new(config).err().unwrap();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("bogus"), "{err}");
    }
}
