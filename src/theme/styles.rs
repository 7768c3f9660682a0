//! Global CSS styles for Pagewright.

pub const GLOBAL_STYLES: &str = r#"
:root {
  --paper: #faf7f2;
  --paper-dim: #f0ebe2;
  --ink: #2b2620;
  --ink-muted: rgba(43, 38, 32, 0.6);
  --rule: #d8d0c2;
  --accent: #8a4b2d;
  --accent-soft: rgba(138, 75, 45, 0.12);
  --active: #4a7a4a;
  --danger: #b03434;

  --font-serif: Georgia, 'Times New Roman', serif;
  --font-sans: 'Helvetica Neue', Arial, sans-serif;
}

* {
  box-sizing: border-box;
}

body {
  margin: 0;
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-sans);
}

.page {
  max-width: 680px;
  margin: 0 auto;
  padding: 1.5rem;
}

.about-admin__header h1 {
  font-family: var(--font-serif);
  margin: 0;
}

.about-admin__tagline {
  color: var(--ink-muted);
  margin-top: 0.25rem;
}

.about-admin__loading {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--ink-muted);
  padding: 2rem 0;
}

.loading-spinner {
  width: 1rem;
  height: 1rem;
  border: 2px solid var(--rule);
  border-top-color: var(--accent);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === About form === */
.about-form {
  background: var(--paper-dim);
  border: 1px solid var(--rule);
  border-radius: 8px;
  padding: 1.25rem;
  margin: 1.5rem 0;
}

.about-form__heading {
  font-family: var(--font-serif);
  margin-top: 0;
}

.about-form__label {
  display: block;
  font-size: 0.85rem;
  color: var(--ink-muted);
  margin: 0.75rem 0 0.25rem;
}

.about-form__input,
.about-form__textarea {
  width: 100%;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--rule);
  border-radius: 6px;
  background: var(--paper);
  color: var(--ink);
  font-family: inherit;
}

.about-form__input:focus,
.about-form__textarea:focus {
  outline: none;
  border-color: var(--accent);
}

.about-form__checkbox-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin: 0.75rem 0;
}

.about-form__error {
  color: var(--danger);
  font-size: 0.9rem;
  margin: 0.5rem 0;
}

.about-form__save {
  padding: 0.5rem 1.5rem;
  background: var(--accent);
  color: var(--paper);
  border: none;
  border-radius: 6px;
  cursor: pointer;
}

.about-form__save:disabled {
  opacity: 0.5;
  cursor: default;
}

/* === Image upload widget === */
.image-upload {
  margin: 0.5rem 0;
}

.image-upload__preview {
  position: relative;
}

.image-upload__img {
  width: 100%;
  height: 12rem;
  object-fit: cover;
  border-radius: 8px;
}

.image-upload__remove {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  width: 1.75rem;
  height: 1.75rem;
  border: none;
  border-radius: 50%;
  background: var(--danger);
  color: var(--paper);
  cursor: pointer;
}

.image-upload__placeholder {
  border: 2px dashed var(--rule);
  border-radius: 8px;
  padding: 1.5rem;
  text-align: center;
}

.image-upload__hint {
  color: var(--ink-muted);
  margin: 0;
}

.image-upload__pick {
  margin-top: 0.5rem;
  padding: 0.4rem 1rem;
  border: 1px solid var(--rule);
  border-radius: 6px;
  background: var(--paper);
  color: var(--ink);
  cursor: pointer;
}

.image-upload__pick:disabled {
  opacity: 0.5;
  cursor: default;
}

.image-upload__busy {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  color: var(--ink-muted);
  margin-top: 0.5rem;
  font-size: 0.9rem;
}

/* === Record list === */
.about-admin__list-header {
  display: flex;
  align-items: baseline;
  justify-content: space-between;
}

.about-admin__list-header h2 {
  font-family: var(--font-serif);
}

.about-admin__new {
  border: 1px solid var(--rule);
  background: var(--paper);
  border-radius: 6px;
  padding: 0.25rem 0.75rem;
  cursor: pointer;
}

.about-admin__empty {
  color: var(--ink-muted);
}

.about-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  border: 1px solid var(--rule);
  border-radius: 8px;
  padding: 0.75rem 1rem;
  margin-bottom: 0.5rem;
  background: var(--paper);
}

.about-row__main {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.about-row__status {
  color: var(--ink-muted);
}

.about-row__status--active {
  color: var(--active);
}

.about-row__title {
  margin: 0;
  font-size: 1rem;
}

.about-row__meta {
  margin: 0.15rem 0 0;
  font-size: 0.8rem;
  color: var(--ink-muted);
}

.about-row__actions {
  display: flex;
  gap: 0.5rem;
}

.about-row__edit,
.about-row__delete {
  border: 1px solid var(--rule);
  background: var(--paper);
  border-radius: 6px;
  padding: 0.25rem 0.75rem;
  cursor: pointer;
}

.about-row__delete {
  color: var(--danger);
}
"#;
