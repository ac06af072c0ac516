//! Theme configuration for the Genskey dashboard.
//!
//! Light enterprise palette with the Genskey brand blue. Chinese fonts come
//! first in the font stack.

/// Color palette for the application.
pub mod colors {
    /// Background colors.
    pub mod background {
        /// Page background.
        pub const PRIMARY: &str = "#f9fafb";
        /// Cards and the header.
        pub const SURFACE: &str = "#ffffff";
        /// Sidebar background.
        pub const SIDEBAR: &str = "#111827";
        /// Sidebar hover state.
        pub const SIDEBAR_HOVER: &str = "#1f2937";
        /// Generic hover state.
        pub const HOVER: &str = "#f3f4f6";
    }

    /// Text colors.
    pub mod text {
        /// Primary text color.
        pub const PRIMARY: &str = "#111827";
        /// Secondary/muted text.
        pub const SECONDARY: &str = "#6b7280";
        /// Text on the dark sidebar.
        pub const INVERSE: &str = "#f9fafb";
        /// Muted text on the dark sidebar.
        pub const INVERSE_MUTED: &str = "#9ca3af";
    }

    /// Brand colors.
    pub mod brand {
        /// Primary Genskey blue.
        pub const PRIMARY: &str = "#0ea5e9";
        /// Darker variant for hover states.
        pub const PRIMARY_DIM: &str = "#0284c7";
        /// Tinted background for selected rows.
        pub const SUBTLE: &str = "rgba(14, 165, 233, 0.12)";
    }

    /// Scientific status colors.
    pub mod scientific {
        /// Safety pass / healthy.
        pub const PASS: &str = "#10b981";
        /// Safety fail / pathogen.
        pub const FAIL: &str = "#ef4444";
        /// Quality warning.
        pub const WARNING: &str = "#f59e0b";
        /// Information.
        pub const INFO: &str = "#3b82f6";
    }

    /// Border colors.
    pub mod border {
        /// Default border.
        pub const DEFAULT: &str = "#e5e7eb";
        /// Border on the dark sidebar.
        pub const SIDEBAR: &str = "rgba(255, 255, 255, 0.08)";
    }

    /// Shadows and overlays.
    pub mod shadow {
        /// Soft shadow for cards.
        pub const SOFT: &str = "0 1px 3px rgba(17, 24, 39, 0.08)";
        /// Mobile overlay.
        pub const OVERLAY: &str = "rgba(17, 24, 39, 0.5)";
    }
}

/// Typography configuration.
pub mod typography {
    /// Body font stack.
    pub const FONT_FAMILY: &str = "'PingFang SC', 'Microsoft YaHei', 'Source Han Sans CN', 'Noto Sans SC', system-ui, -apple-system, sans-serif";
    /// Monospace stack for sequences and identifiers.
    pub const FONT_FAMILY_MONO: &str = "'SF Mono', Monaco, 'Cascadia Code', 'Roboto Mono', monospace";

    /// Font sizes.
    pub mod sizes {
        /// Extra small text.
        pub const XS: &str = "0.75rem";
        /// Small text.
        pub const SM: &str = "0.875rem";
        /// Base text.
        pub const BASE: &str = "1rem";
        /// Large text.
        pub const LG: &str = "1.125rem";
        /// Heading.
        pub const HEADING: &str = "1.75rem";
    }
}

/// Spacing values.
pub mod spacing {
    /// Extra small spacing.
    pub const XS: &str = "0.25rem";
    /// Small spacing.
    pub const SM: &str = "0.5rem";
    /// Medium spacing.
    pub const MD: &str = "1rem";
    /// Large spacing.
    pub const LG: &str = "1.5rem";
    /// Extra large spacing.
    pub const XL: &str = "2rem";
}

/// Border radius values.
pub mod radius {
    /// Small radius.
    pub const SM: &str = "0.375rem";
    /// Medium radius.
    pub const MD: &str = "0.5rem";
    /// Large radius.
    pub const LG: &str = "0.75rem";
}

/// Sidebar width on desktop.
pub const SIDEBAR_WIDTH: &str = "16rem";

/// Transition for interactive elements.
pub const TRANSITION: &str = "0.15s cubic-bezier(0.4, 0, 0.2, 1)";

/// Generate CSS custom properties for the theme.
#[must_use]
pub fn generate_css_variables() -> String {
    format!(
        r":root {{
  /* Background colors */
  --bg-primary: {bg_primary};
  --bg-surface: {bg_surface};
  --bg-sidebar: {bg_sidebar};
  --bg-sidebar-hover: {bg_sidebar_hover};
  --bg-hover: {bg_hover};

  /* Text colors */
  --text-primary: {text_primary};
  --text-secondary: {text_secondary};
  --text-inverse: {text_inverse};
  --text-inverse-muted: {text_inverse_muted};

  /* Brand and status colors */
  --brand-primary: {brand_primary};
  --brand-primary-dim: {brand_primary_dim};
  --brand-subtle: {brand_subtle};
  --status-pass: {status_pass};
  --status-fail: {status_fail};
  --status-warning: {status_warning};
  --status-info: {status_info};

  /* Borders and shadows */
  --border-default: {border_default};
  --border-sidebar: {border_sidebar};
  --shadow-soft: {shadow_soft};
  --overlay-bg: {overlay_bg};

  /* Typography */
  --font-family: {font_family};
  --font-family-mono: {font_family_mono};
  --font-size-xs: {font_xs};
  --font-size-sm: {font_sm};
  --font-size-base: {font_base};
  --font-size-lg: {font_lg};
  --font-size-heading: {font_heading};

  /* Spacing */
  --spacing-xs: {spacing_xs};
  --spacing-sm: {spacing_sm};
  --spacing-md: {spacing_md};
  --spacing-lg: {spacing_lg};
  --spacing-xl: {spacing_xl};

  /* Border radius */
  --radius-sm: {radius_sm};
  --radius-md: {radius_md};
  --radius-lg: {radius_lg};

  /* Layout */
  --sidebar-width: {sidebar_width};
  --transition: {transition};
}}",
        bg_primary = colors::background::PRIMARY,
        bg_surface = colors::background::SURFACE,
        bg_sidebar = colors::background::SIDEBAR,
        bg_sidebar_hover = colors::background::SIDEBAR_HOVER,
        bg_hover = colors::background::HOVER,
        text_primary = colors::text::PRIMARY,
        text_secondary = colors::text::SECONDARY,
        text_inverse = colors::text::INVERSE,
        text_inverse_muted = colors::text::INVERSE_MUTED,
        brand_primary = colors::brand::PRIMARY,
        brand_primary_dim = colors::brand::PRIMARY_DIM,
        brand_subtle = colors::brand::SUBTLE,
        status_pass = colors::scientific::PASS,
        status_fail = colors::scientific::FAIL,
        status_warning = colors::scientific::WARNING,
        status_info = colors::scientific::INFO,
        border_default = colors::border::DEFAULT,
        border_sidebar = colors::border::SIDEBAR,
        shadow_soft = colors::shadow::SOFT,
        overlay_bg = colors::shadow::OVERLAY,
        font_family = typography::FONT_FAMILY,
        font_family_mono = typography::FONT_FAMILY_MONO,
        font_xs = typography::sizes::XS,
        font_sm = typography::sizes::SM,
        font_base = typography::sizes::BASE,
        font_lg = typography::sizes::LG,
        font_heading = typography::sizes::HEADING,
        spacing_xs = spacing::XS,
        spacing_sm = spacing::SM,
        spacing_md = spacing::MD,
        spacing_lg = spacing::LG,
        spacing_xl = spacing::XL,
        radius_sm = radius::SM,
        radius_md = radius::MD,
        radius_lg = radius::LG,
        sidebar_width = SIDEBAR_WIDTH,
        transition = TRANSITION,
    )
}
