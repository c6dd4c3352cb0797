//! Console output for the chat surface

use biosense_domain::{
    EXAMPLE_QUESTIONS, Model, PresentationOptions, QUICK_PROMPTS, Role, Turn,
};
use colored::Colorize;

const WIDTH: usize = 60;

/// Formats the chat surface for the terminal
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Title block shown once at start-up
    pub fn hero(model: &Model) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{}\n{}\n{}\n{}\n",
            line.cyan(),
            "🧬 BioSense AI".bold(),
            "Chat científico para biosensores, EIS y troponina, usando Gemini.",
            format!("[Gemini • {}]  [Memoria en sesión]", model).dimmed(),
            line.cyan()
        )
    }

    /// Landing cards and quick prompts, shown while the transcript is empty
    pub fn landing() -> String {
        let mut output = String::new();

        output.push_str(&Self::card(
            "👋 Empieza con una pregunta",
            &[
                "Esta app está pensada para explicación y análisis conceptual de impedancia (EIS), biosensores y mediciones.",
            ],
        ));
        output.push_str(&format!("  {}\n", "Ejemplos:".bold()));
        for question in EXAMPLE_QUESTIONS {
            output.push_str(&format!("    * {}\n", question));
        }

        output.push_str(&Self::card(
            "🧪 Modo laboratorio",
            &[
                "Describe variables, supuestos y controles. Ideal para docencia.",
                "Sugerencia: pega parámetros del circuito equivalente (Rs, Rct, Cdl) y pide interpretación.",
            ],
        ));

        output.push_str(&Self::card(
            "🧠 Preparación para ML",
            &[
                "Puedes pedir features y pipelines: extracción de parámetros, ventanas temporales, etc.",
                "Tip: “Dame features para predecir concentración usando EIS”.",
            ],
        ));

        output.push('\n');
        output.push_str(&Self::quick_prompts());
        output
    }

    /// Numbered quick prompts
    pub fn quick_prompts() -> String {
        let mut output = format!("{}\n", "Preguntas rápidas:".cyan().bold());
        for (index, prompt) in QUICK_PROMPTS.iter().enumerate() {
            output.push_str(&format!("  {} {}\n", format!("/{}", index + 1).yellow(), prompt));
        }
        output
    }

    /// One transcript turn
    pub fn turn(turn: &Turn) -> String {
        let label = match turn.role() {
            Role::User => "Tú".green().bold(),
            Role::Assistant => "BioSense AI".cyan().bold(),
        };
        format!("\n{}\n{}\n", label, turn.content())
    }

    /// Consecutive turns, in order
    pub fn turns(turns: &[Turn]) -> String {
        turns.iter().map(Self::turn).collect()
    }

    /// Session summary for `/info`
    pub fn info(model: &Model, options: &PresentationOptions, turns: usize) -> String {
        format!(
            "\n{}\n  - Modelo: {}\n  - Modo: Chat con memoria (sesión)\n  - Tono: {}\n  - Nivel de detalle: {}/5\n  - Mensajes: {}\n",
            "⚙️ BioSense AI".bold(),
            model.to_string().yellow(),
            options.tone.label(),
            options.detail,
            turns
        )
    }

    /// Confirmation after a tone or detail change
    pub fn options_changed(options: &PresentationOptions) -> String {
        format!(
            "{} Tono: {} | Nivel de detalle: {}/5",
            "v".green(),
            options.tone.label(),
            options.detail
        )
    }

    pub fn conversation_reset() -> String {
        format!("{} Nueva conversación", "v".green())
    }

    pub fn help() -> String {
        let mut output = format!("\n{}\n", "Comandos:".bold());
        for (command, description) in [
            ("<texto>", "Enviar una pregunta"),
            ("/1 .. /4, /q N", "Enviar una pregunta rápida"),
            ("/prompts", "Mostrar las preguntas rápidas"),
            ("/new, /reset", "Nueva conversación"),
            ("/tone <tono>", "technical | didactic | concise"),
            ("/detail <1-5>", "Nivel de detalle"),
            ("/info", "Modelo y opciones actuales"),
            ("/help", "Mostrar esta ayuda"),
            ("/quit", "Salir"),
        ] {
            output.push_str(&format!("  {:<16} {}\n", command, description));
        }
        output
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message.red())
    }

    fn card(title: &str, lines: &[&str]) -> String {
        let mut output = format!("\n{}\n", title.bold());
        for line in lines {
            output.push_str(&format!("  {}\n", line));
        }
        output
    }
}
