//! Fixed prompts offered by the chat surface

/// Quick prompts, selectable by their 1-based position
pub const QUICK_PROMPTS: [&str; 4] = [
    "Explica impedancia electroquímica aplicada a troponina.",
    "¿Qué parámetros del circuito de Randles cambian con la unión antígeno-anticuerpo?",
    "Dame un checklist de medición EIS (frecuencias, amplitud, estabilidad).",
    "Propón un enfoque de ML para estimar concentración desde espectros EIS.",
];

/// Example questions shown on the landing card
pub const EXAMPLE_QUESTIONS: [&str; 3] = [
    "¿Cómo cambia Rct cuando se une troponina al anticuerpo?",
    "¿Cómo interpretar un diagrama de Nyquist?",
    "Propón un protocolo de medición EIS para suero.",
];

/// Look up a quick prompt by its 1-based number.
pub fn quick_prompt(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|index| QUICK_PROMPTS.get(index))
        .copied()
}
