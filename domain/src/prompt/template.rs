//! Prompt templates for the tutoring chat

use super::options::{PresentationOptions, Tone};

/// Templates for the system instruction and the per-message wrapper
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction used when none is configured
    pub fn default_system_instruction() -> &'static str {
        "Eres un asistente útil y claro."
    }

    /// Style fragment for each tone
    pub fn style_instruction(tone: Tone) -> &'static str {
        match tone {
            Tone::Technical => {
                "Responde con rigor técnico, ecuaciones cuando aplique y supuestos claros."
            }
            Tone::Didactic => "Responde de forma didáctica, con analogías y pasos numerados.",
            Tone::Concise => "Responde en pocas líneas, directo al punto, sin relleno.",
        }
    }

    /// Clause asking the model to flag clinical risk
    pub fn clinical_disclaimer() -> &'static str {
        "Si hay riesgos clínicos: incluye advertencia de que no es diagnóstico."
    }

    /// Wrap the user's text in the format instructions for `options`.
    ///
    /// The format block comes first and the user text is always the final
    /// segment of the returned string.
    pub fn compose(user_text: &str, options: &PresentationOptions) -> String {
        format!(
            r#"
INSTRUCCIONES DE FORMATO:
- {}
- Nivel de detalle: {}/5
- {}

PREGUNTA DEL USUARIO:
{}
"#,
            Self::style_instruction(options.tone),
            options.detail,
            Self::clinical_disclaimer(),
            user_text
        )
        .trim()
        .to_string()
    }
}
