//! Prompt assembly for the visitor chat widget.
//!
//! The assistant is grounded with a snapshot of the site catalogue (lab and
//! project names in the source language) taken at request time.

/// Names pulled from the catalogue for prompt grounding.
#[derive(Debug, Default, Clone)]
pub struct SiteSnapshot {
    pub lab_names: Vec<String>,
    pub project_names: Vec<String>,
}

impl SiteSnapshot {
    /// Render the system portion of the prompt.
    pub fn to_context(&self) -> String {
        let mut context = String::from(
            "Ты — AI-помощник на сайте института. Твоя цель — помогать посетителям.\n\n",
        );

        context.push_str("Лаборатории:\n");
        for name in &self.lab_names {
            context.push_str("- ");
            context.push_str(name);
            context.push('\n');
        }

        context.push_str("\nПроекты:\n");
        for name in &self.project_names {
            context.push_str("- ");
            context.push_str(name);
            context.push('\n');
        }

        context.push_str("\nОтвечай кратко и вежливо на русском языке.");
        context
    }

    /// Combine the site context with the visitor's question.
    pub fn build_prompt(&self, user_message: &str) -> String {
        format!(
            "{}\n\nВопрос пользователя: {}",
            self.to_context(),
            user_message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_lists_catalogue_names() {
        let snapshot = SiteSnapshot {
            lab_names: vec!["Лаборатория данных".to_string()],
            project_names: vec!["Прогнозная модель".to_string()],
        };
        let prompt = snapshot.build_prompt("Какие у вас лаборатории?");

        assert!(prompt.contains("- Лаборатория данных"));
        assert!(prompt.contains("- Прогнозная модель"));
        assert!(prompt.contains("Вопрос пользователя: Какие у вас лаборатории?"));
    }

    #[test]
    fn empty_snapshot_still_builds_a_prompt() {
        let prompt = SiteSnapshot::default().build_prompt("привет");
        assert!(prompt.contains("Лаборатории:"));
        assert!(prompt.ends_with("привет"));
    }
}
