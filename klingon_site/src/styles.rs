//! CSS styles for the landing page.
//!
//! The stylesheet is inlined into the document head, so the exported page
//! is a single self-contained HTML file apart from its images.
//!
//! # Customization
//!
//! ```rust
//! use klingon_site::styles::PAGE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Complete CSS for the page - dark crimson theme.
///
/// The mobile menu hook is `.nav-links-open`. Below 768px the link list is
/// hidden unless that class is present; above it the list is always shown
/// and the toggle button is hidden.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-deep: #0b0506;
    --bg-panel: #160a0c;
    --bg-card: #1f0e11;
    --text-bright: #f3e9e4;
    --text-dim: #b9a7a2;
    --accent-crimson: #c1121f;
    --accent-gold: #e0a526;
    --border-subtle: rgba(224, 165, 38, 0.15);
    --border-visible: rgba(224, 165, 38, 0.35);
    --font-heading: 'Orbitron', 'Eurostile', 'Segoe UI', sans-serif;
    --font-body: 'Roboto', 'Helvetica Neue', Arial, sans-serif;
    --container-max: 1180px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-body);
    background: radial-gradient(circle at top, #2a0d12 0%, var(--bg-deep) 60%);
    color: var(--text-bright);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

img {
    max-width: 100%;
    height: auto;
}

a {
    color: inherit;
}

.page {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

.sr-only {
    position: absolute;
    left: -9999px;
    top: 0;
    padding: 8px 16px;
    background: var(--accent-gold);
    color: var(--bg-deep);
    z-index: 100;
}

.sr-only:focus {
    left: 16px;
    top: 16px;
}

/* Nav Bar */
.nav {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 24px;
    flex-wrap: wrap;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 20px 24px;
}

.brand {
    display: flex;
    align-items: center;
    gap: 12px;
}

.brand-logo {
    width: 36px;
    height: 36px;
    border-radius: 8px;
    background: linear-gradient(135deg, var(--accent-crimson), var(--accent-gold));
}

.brand-name {
    font-family: var(--font-heading);
    font-weight: 700;
    letter-spacing: 0.08em;
    text-transform: uppercase;
}

.menu-toggle {
    display: none;
    background: transparent;
    color: var(--text-bright);
    border: 1px solid var(--border-visible);
    border-radius: 6px;
    padding: 8px 14px;
    font: inherit;
    cursor: pointer;
}

.nav-links {
    display: flex;
    gap: 28px;
}

.nav-links a,
.footer-nav a {
    text-decoration: none;
    color: var(--text-dim);
}

.nav-links a:hover,
.footer-nav a:hover {
    color: var(--accent-gold);
}

.nav-cta,
.primary-button,
.download-button {
    display: inline-block;
    text-decoration: none;
    font-family: var(--font-heading);
    font-weight: 600;
    letter-spacing: 0.05em;
    border-radius: 999px;
    padding: 10px 22px;
    background: var(--accent-crimson);
    color: var(--text-bright);
}

.download-button {
    background: transparent;
    border: 1px solid var(--accent-gold);
}

/* Hero */
.hero {
    display: grid;
    grid-template-columns: 1.1fr 1fr;
    gap: 48px;
    align-items: center;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 64px 24px;
}

.eyebrow,
.section-heading span {
    display: inline-block;
    font-size: 12px;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: var(--accent-gold);
}

.hero-title,
.cta-title,
.section-heading h2 {
    font-family: var(--font-heading);
    line-height: 1.15;
    margin: 12px 0 20px;
}

.hero-title {
    font-size: clamp(2.2rem, 5vw, 3.6rem);
}

.hero-subtitle {
    color: var(--text-dim);
    font-size: 1.1rem;
    max-width: 38em;
}

.hero-actions {
    margin-top: 32px;
}

.hero-image-wrapper {
    position: relative;
}

.logo-badge {
    position: absolute;
    top: 16px;
    right: 16px;
    padding: 6px 12px;
    border-radius: 999px;
    border: 1px solid var(--border-visible);
    background: rgba(11, 5, 6, 0.8);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.12em;
}

/* Sections */
.section {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 72px 24px;
}

.section-heading {
    text-align: center;
    margin-bottom: 48px;
}

.features-grid,
.testimonials {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 24px;
}

.feature-card,
.testimonial-card {
    background: var(--bg-card);
    border: 1px solid var(--border-subtle);
    border-radius: 16px;
    padding: 28px;
}

.feature-icon {
    width: 72px;
    height: 72px;
}

.feature-title {
    font-family: var(--font-heading);
    font-size: 1.1rem;
}

.feature-description,
.testimonial-title {
    color: var(--text-dim);
}

.showcase {
    display: grid;
    grid-template-columns: 1fr 1.3fr;
    gap: 40px;
    align-items: center;
}

.showcase-highlights {
    display: grid;
    gap: 16px;
    margin-top: 24px;
}

.highlight {
    display: flex;
    flex-direction: column;
    border-left: 3px solid var(--accent-crimson);
    padding-left: 14px;
}

.highlight strong {
    color: var(--accent-gold);
}

.testimonial-portrait img {
    width: 96px;
    height: 96px;
    border-radius: 50%;
}

.testimonial-quote {
    font-style: italic;
}

.testimonial-name {
    font-weight: 700;
    margin: 0;
}

.testimonial-title {
    margin: 0;
    font-size: 0.9rem;
}

/* Call to action */
.cta-banner {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 32px;
    background: var(--bg-panel);
    border: 1px solid var(--border-visible);
    border-radius: 24px;
    margin-bottom: 72px;
}

.download-buttons {
    display: flex;
    gap: 16px;
    flex-wrap: wrap;
}

/* Footer */
.footer {
    margin-top: auto;
    border-top: 1px solid var(--border-subtle);
    background: var(--bg-panel);
}

.footer-inner {
    display: flex;
    align-items: center;
    gap: 24px;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 32px 24px;
}

.footer-meta p {
    margin: 0 0 8px;
    color: var(--text-dim);
    font-size: 0.9rem;
}

.footer-nav {
    display: flex;
    gap: 20px;
    flex-wrap: wrap;
}

@media (max-width: 960px) {
    .hero,
    .showcase {
        grid-template-columns: 1fr;
    }

    .features-grid,
    .testimonials {
        grid-template-columns: 1fr;
    }

    .cta-banner {
        flex-direction: column;
        align-items: flex-start;
    }
}

@media (max-width: 768px) {
    .menu-toggle {
        display: inline-block;
    }

    .nav-links {
        display: none;
        flex-direction: column;
        width: 100%;
        gap: 12px;
        padding: 12px 0;
        border-top: 1px solid var(--border-subtle);
    }

    .nav-links.nav-links-open {
        display: flex;
    }

    .nav-cta {
        order: 2;
    }
}
"#;

/// Content-Security-Policy for the exported page.
///
/// Images may come from a remote asset base, everything else is inline or
/// same-origin.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
