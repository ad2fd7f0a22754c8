use wgpu::SurfaceError;

use super::SurfaceErrorAction;

const SRGB_PREFERENCE: [wgpu::TextureFormat; 2] = [
    wgpu::TextureFormat::Bgra8UnormSrgb,
    wgpu::TextureFormat::Rgba8UnormSrgb,
];

/// Picks the output pixel format the pipeline is compiled against.
pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        if let Some(f) = SRGB_PREFERENCE.into_iter().find(|f| caps.formats.contains(f)) {
            return Some(f);
        }
    }

    caps.formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Maps an acquisition error to the frame loop's response.
///
/// `Reconfigured` means the caller must configure the surface again before the
/// next acquisition.
pub(crate) fn surface_error_action(err: &SurfaceError) -> SurfaceErrorAction {
    match err {
        SurfaceError::Lost | SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, TextureFormat};

    fn caps(
        formats: &[TextureFormat],
        alpha_modes: &[CompositeAlphaMode],
    ) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats: formats.to_vec(),
            present_modes: vec![wgpu::PresentMode::Fifo],
            alpha_modes: alpha_modes.to_vec(),
            usages: wgpu::TextureUsages::RENDER_ATTACHMENT,
        }
    }

    #[test]
    fn srgb_preferred_when_requested() {
        let c = caps(
            &[TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb],
            &[],
        );
        assert_eq!(choose_surface_format(&c, true), Some(TextureFormat::Rgba8UnormSrgb));
        assert_eq!(choose_surface_format(&c, false), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn bgra_srgb_wins_over_rgba_srgb() {
        let c = caps(
            &[TextureFormat::Rgba8UnormSrgb, TextureFormat::Bgra8UnormSrgb],
            &[],
        );
        assert_eq!(choose_surface_format(&c, true), Some(TextureFormat::Bgra8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format() {
        let c = caps(&[TextureFormat::Rgb10a2Unorm, TextureFormat::Bgra8Unorm], &[]);
        assert_eq!(choose_surface_format(&c, true), Some(TextureFormat::Rgb10a2Unorm));
    }

    #[test]
    fn no_formats_is_none() {
        assert_eq!(choose_surface_format(&caps(&[], &[]), true), None);
    }

    #[test]
    fn alpha_mode_respects_support() {
        let c = caps(&[], &[CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied]);
        assert_eq!(
            choose_alpha_mode(&c, Some(CompositeAlphaMode::PreMultiplied)),
            CompositeAlphaMode::PreMultiplied
        );
        assert_eq!(
            choose_alpha_mode(&c, Some(CompositeAlphaMode::PostMultiplied)),
            CompositeAlphaMode::Opaque
        );
        assert_eq!(choose_alpha_mode(&caps(&[], &[]), None), CompositeAlphaMode::Auto);
    }

    #[test]
    fn surface_errors_map_to_actions() {
        assert_eq!(surface_error_action(&SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(surface_error_action(&SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(surface_error_action(&SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(surface_error_action(&SurfaceError::Other), SurfaceErrorAction::SkipFrame);
        assert_eq!(surface_error_action(&SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
