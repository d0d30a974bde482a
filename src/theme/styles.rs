//! Global CSS styles for the Warm Agent site.
//!
//! Warm, friendly single-page aesthetic: coral brand accents, teal
//! highlights, soft paper surfaces. Injected once by the root `App`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --coral: #FF6B6B;
  --coral-soft: rgba(255, 107, 107, 0.12);
  --teal: #4ECDC4;
  --teal-soft: rgba(78, 205, 196, 0.14);

  /* FEEDBACK */
  --success: #06D6A0;
  --error: #EF476F;

  /* TEXT */
  --ink: #2B2B38;
  --ink-soft: #5D5D6B;
  --ink-faint: #9a9aa8;

  /* SURFACES */
  --paper: #ffffff;
  --paper-warm: #fff7f4;
  --paper-cool: #f4fbfa;
  --line: #ececf1;

  /* CODE */
  --code-bg: #2B2B38;
  --code-text: #f5f5f7;

  /* Typography */
  --font-sans: 'Inter', 'Helvetica Neue', Arial, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Layout */
  --page-width: 1080px;
  --navbar-height: 64px;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --reveal-duration: 0.6s;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.7;
  min-height: 100vh;
}

a {
  color: var(--teal);
  text-decoration: none;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--navbar-height);
  background: rgba(255, 255, 255, 0.92);
  backdrop-filter: blur(8px);
  z-index: 100;
  box-shadow: none;
  transition: box-shadow var(--transition-normal);
}

.navbar.scrolled {
  box-shadow: 0 2px 20px rgba(0, 0, 0, 0.1);
}

.navbar-inner {
  max-width: var(--page-width);
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.nav-brand {
  font-size: var(--text-lg);
  font-weight: 700;
  color: var(--ink);
  display: flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
}

.nav-brand-mark {
  color: var(--coral);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: 1.75rem;
}

.nav-link {
  font-size: var(--text-sm);
  font-weight: 500;
  color: var(--ink-soft);
  background: none;
  border: none;
  cursor: pointer;
  font-family: inherit;
  transition: color var(--transition-fast);
}

.nav-link:hover {
  color: var(--coral);
}

.nav-cta {
  font-size: var(--text-sm);
  font-weight: 600;
  color: #fff;
  background: var(--coral);
  border: none;
  border-radius: 999px;
  padding: 0.5rem 1.25rem;
  cursor: pointer;
  font-family: inherit;
  transition: opacity var(--transition-fast);
}

.nav-cta:hover {
  opacity: 0.85;
}

/* === Hero === */
.hero {
  background: linear-gradient(160deg, var(--paper-warm) 0%, var(--paper) 55%, var(--paper-cool) 100%);
  padding: calc(var(--navbar-height) + 5rem) 1.5rem 5rem;
  text-align: center;
}

.hero-title {
  font-size: var(--text-3xl);
  font-weight: 800;
  line-height: 1.2;
  max-width: 800px;
  margin: 0 auto 1.25rem;
}

.hero-title em {
  font-style: normal;
  color: var(--coral);
}

.hero-tagline {
  font-size: var(--text-lg);
  color: var(--ink-soft);
  max-width: 620px;
  margin: 0 auto 2.5rem;
}

.hero-actions {
  display: flex;
  justify-content: center;
  gap: 1rem;
}

.btn-primary {
  font-size: var(--text-base);
  font-weight: 600;
  font-family: inherit;
  color: #fff;
  background: var(--coral);
  border: none;
  border-radius: 999px;
  padding: 0.85rem 2rem;
  cursor: pointer;
  box-shadow: 0 8px 24px var(--coral-soft);
  transition: transform var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary:hover {
  transform: translateY(-2px);
  opacity: 0.9;
}

.btn-secondary {
  font-size: var(--text-base);
  font-weight: 600;
  font-family: inherit;
  color: var(--ink);
  background: transparent;
  border: 2px solid var(--teal);
  border-radius: 999px;
  padding: 0.85rem 2rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.btn-secondary:hover {
  background: var(--teal-soft);
}

/* === Sections === */
.section {
  max-width: var(--page-width);
  margin: 0 auto;
  padding: 5rem 1.5rem;
}

.section--tinted {
  max-width: none;
  background: var(--paper-cool);
}

.section--tinted .section-inner {
  max-width: var(--page-width);
  margin: 0 auto;
  padding: 0 1.5rem;
}

.section-title {
  font-size: var(--text-2xl);
  font-weight: 700;
  text-align: center;
  margin-bottom: 0.75rem;
}

.section-subtitle {
  font-size: var(--text-base);
  color: var(--ink-soft);
  text-align: center;
  max-width: 560px;
  margin: 0 auto 3rem;
}

/* === Feature Cards === */
.features-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.feature-card {
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 16px;
  padding: 2rem 1.75rem;
  /* Reveal start state: transparent and offset until the observer fires */
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--reveal-duration) ease, transform var(--reveal-duration) ease,
              box-shadow var(--transition-normal);
}

.feature-card.visible {
  opacity: 1;
  transform: translateY(0);
}

.feature-card:hover {
  box-shadow: 0 12px 32px rgba(43, 43, 56, 0.08);
}

.feature-icon {
  font-size: var(--text-xl);
  width: 52px;
  height: 52px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--coral-soft);
  border-radius: 14px;
  margin-bottom: 1.25rem;
}

.feature-title {
  font-size: var(--text-lg);
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.feature-blurb {
  font-size: var(--text-sm);
  color: var(--ink-soft);
}

/* === Code Blocks === */
.quickstart-blocks {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  max-width: 720px;
  margin: 0 auto;
}

.code-block {
  background: var(--code-bg);
  border-radius: 12px;
  overflow: hidden;
}

.code-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.6rem 1rem;
  background: rgba(255, 255, 255, 0.06);
}

.code-title {
  font-family: var(--font-mono);
  font-size: var(--text-xs);
  color: rgba(245, 245, 247, 0.6);
  letter-spacing: 0.06em;
  text-transform: uppercase;
}

.copy-btn {
  display: flex;
  align-items: center;
  background: none;
  border: none;
  color: rgba(245, 245, 247, 0.6);
  cursor: pointer;
  padding: 0.25rem;
  transition: color var(--transition-fast);
}

.copy-btn:hover {
  color: var(--code-text);
}

.copy-btn.copied {
  color: var(--success);
}

.code-block pre {
  padding: 1.25rem 1.5rem;
  overflow-x: auto;
}

.code-block code {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--code-text);
  line-height: 1.8;
  white-space: pre;
}

/* === Pricing Cards === */
.pricing-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
  align-items: stretch;
}

.pricing-card {
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 16px;
  padding: 2.25rem 1.75rem;
  display: flex;
  flex-direction: column;
  /* Same reveal start state as feature cards */
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--reveal-duration) ease, transform var(--reveal-duration) ease;
}

.pricing-card.visible {
  opacity: 1;
  transform: translateY(0);
}

.pricing-card--featured {
  border: 2px solid var(--coral);
  box-shadow: 0 16px 40px var(--coral-soft);
}

.plan-badge {
  align-self: flex-start;
  font-size: var(--text-xs);
  font-weight: 700;
  color: #fff;
  background: var(--coral);
  border-radius: 999px;
  padding: 0.15rem 0.75rem;
  margin-bottom: 1rem;
}

.plan-name {
  font-size: var(--text-lg);
  font-weight: 700;
}

.plan-price {
  font-size: var(--text-2xl);
  font-weight: 800;
  margin: 0.75rem 0 0.25rem;
}

.plan-period {
  font-size: var(--text-sm);
  color: var(--ink-faint);
  margin-bottom: 1.5rem;
}

.plan-features {
  list-style: none;
  flex: 1;
  margin-bottom: 1.75rem;
}

.plan-features li {
  font-size: var(--text-sm);
  color: var(--ink-soft);
  padding: 0.4rem 0;
  display: flex;
  gap: 0.5rem;
}

.plan-features li::before {
  content: '\2713';
  color: var(--teal);
  font-weight: 700;
}

.plan-cta {
  font-size: var(--text-sm);
  font-weight: 600;
  font-family: inherit;
  border-radius: 999px;
  padding: 0.7rem 1.5rem;
  cursor: pointer;
  border: 2px solid var(--coral);
  background: transparent;
  color: var(--coral);
  transition: background var(--transition-fast), color var(--transition-fast);
}

.plan-cta:hover,
.pricing-card--featured .plan-cta {
  background: var(--coral);
  color: #fff;
}

/* === Signup === */
.signup-panel {
  max-width: 440px;
  margin: 0 auto;
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 16px;
  padding: 2.5rem 2.25rem;
  box-shadow: 0 16px 48px rgba(43, 43, 56, 0.06);
}

.form-group {
  margin-bottom: 1.25rem;
}

.form-label {
  display: block;
  font-size: var(--text-sm);
  font-weight: 600;
  margin-bottom: 0.4rem;
}

.form-input {
  width: 100%;
  font-size: var(--text-base);
  font-family: inherit;
  color: var(--ink);
  background: var(--paper);
  border: 1px solid var(--line);
  border-radius: 10px;
  padding: 0.7rem 0.9rem;
  transition: border-color var(--transition-fast);
}

.form-input:focus {
  outline: none;
  border-color: var(--teal);
}

.checkbox-row {
  display: flex;
  align-items: flex-start;
  gap: 0.6rem;
  font-size: var(--text-sm);
  color: var(--ink-soft);
  margin-bottom: 1.5rem;
}

.checkbox-row input {
  margin-top: 0.3rem;
  accent-color: var(--coral);
}

.signup-submit {
  width: 100%;
  font-size: var(--text-base);
  font-weight: 600;
  font-family: inherit;
  color: #fff;
  background: var(--coral);
  border: none;
  border-radius: 999px;
  padding: 0.85rem;
  cursor: pointer;
  transition: opacity var(--transition-fast);
}

.signup-submit:hover {
  opacity: 0.9;
}

/* === Signup Result === */
.signup-result {
  text-align: center;
}

.result-title {
  font-size: var(--text-lg);
  font-weight: 700;
  margin-bottom: 0.5rem;
}

.result-note {
  font-size: var(--text-sm);
  color: var(--ink-soft);
  margin-bottom: 1.5rem;
}

.api-key-display {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  background: var(--code-bg);
  border-radius: 10px;
  padding: 0.8rem 1rem;
  margin-bottom: 1rem;
}

.api-key-text {
  font-family: var(--font-mono);
  font-size: var(--text-sm);
  color: var(--code-text);
  overflow-x: auto;
  white-space: nowrap;
}

.result-warning {
  font-size: var(--text-xs);
  color: var(--ink-faint);
}

/* === Toast === */
.toast {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 200;
  display: flex;
  align-items: center;
  gap: 0.6rem;
  color: #fff;
  border-radius: 12px;
  padding: 0.8rem 1.25rem;
  box-shadow: 0 12px 32px rgba(43, 43, 56, 0.18);
  opacity: 0;
  transform: translateY(120%);
  transition: opacity var(--transition-normal), transform var(--transition-normal);
  pointer-events: none;
}

.toast.active {
  opacity: 1;
  transform: translateY(0);
}

.toast--success {
  background: var(--success);
}

.toast--error {
  background: var(--error);
}

.toast-message {
  font-size: var(--text-sm);
  font-weight: 600;
}

/* === Footer === */
.footer {
  border-top: 1px solid var(--line);
  padding: 2.5rem 1.5rem;
  text-align: center;
}

.footer-brand {
  font-weight: 700;
  margin-bottom: 0.25rem;
}

.footer-note {
  font-size: var(--text-sm);
  color: var(--ink-faint);
}

/* === Responsive === */
@media (max-width: 900px) {
  .features-grid,
  .pricing-grid {
    grid-template-columns: 1fr;
  }

  .hero-title {
    font-size: var(--text-2xl);
  }

  .nav-links .nav-link {
    display: none;
  }
}
"#;
