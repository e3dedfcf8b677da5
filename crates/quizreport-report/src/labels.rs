//! Fixed label text for each report locale.

use quizreport_core::config::Locale;

/// The fixed wording around rendered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub header: &'static str,
    pub question: &'static str,
    pub answers: &'static str,
    pub correct: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub total: &'static str,
    pub successful: &'static str,
}

static EN: Labels = Labels {
    header: "Report for quiz test",
    question: "Question",
    answers: "Answers:",
    correct: "Correct:",
    yes: "yes",
    no: "no",
    total: "Total questions:",
    successful: "Correct answers:",
};

static RU: Labels = Labels {
    header: "Отчёт о прохождении теста",
    question: "Вопрос",
    answers: "Ответы пользователя:",
    correct: "Содержит правильный ответ:",
    yes: "да",
    no: "нет",
    total: "Всего вопросов:",
    successful: "Отвечено правильно:",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }

    pub fn flag(&self, successful: bool) -> &'static str {
        if successful {
            self.yes
        } else {
            self.no
        }
    }
}
