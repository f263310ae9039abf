use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition { css: LIGHT_THEME },
        ThemeMode::Dark => ThemeDefinition { css: DARK_THEME },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f7f7f8;
    --color-bg-panel: #ffffff;
    --color-text-primary: #000000;
    --color-text-muted: #6b6b6b;
    --color-border: #e2e2e4;
    --color-input-border: #c9c9cc;
    --color-input-bg: #ffffff;
    --color-chat-user-bg: #dcfce7;
    --color-chat-user-text: #000000;
    --color-chat-assistant-bg: #000000;
    --color-chat-assistant-text: #ffffff;
    --color-btn-bg: #000000;
    --color-btn-text: #ffffff;
    --color-btn-hover: #1f2937;
    --color-mic-bg: #1f2937;
    --color-mic-hover: #111827;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-panel); border-bottom-color: var(--color-border); }
.composer { background: var(--color-bg-panel); border-top-color: var(--color-border); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b0b0c;
    --color-bg-panel: #161618;
    --color-text-primary: #f4f4f5;
    --color-text-muted: #9b9b9e;
    --color-border: #2a2a2d;
    --color-input-border: #3a3a3e;
    --color-input-bg: #0b0b0c;
    --color-chat-user-bg: #14532d;
    --color-chat-user-text: #f4f4f5;
    --color-chat-assistant-bg: #f4f4f5;
    --color-chat-assistant-text: #0b0b0c;
    --color-btn-bg: #f4f4f5;
    --color-btn-text: #0b0b0c;
    --color-btn-hover: #d4d4d8;
    --color-mic-bg: #3a3a3e;
    --color-mic-hover: #4b4b50;
}
body { background: var(--color-bg-primary); color: var(--color-text-primary); }
.header { background: var(--color-bg-panel); border-bottom-color: var(--color-border); }
.composer { background: var(--color-bg-panel); border-top-color: var(--color-border); }
.composer input { background: var(--color-input-bg); color: var(--color-text-primary); border-color: var(--color-input-border); }
"#;
