//! Quiz sessions.
//!
//! Questions are bundled statically with translations inline; a session
//! walks them in order and produces a `QuizAttemptRecord` for the
//! external backend when finished.

use fizlab_core::enums::Language;
use fizlab_core::schema::QuizAttemptRecord;

use crate::i18n;

/// One string in all supported languages.
#[derive(Debug, Clone, Copy)]
pub struct LocalizedText {
    pub pl: &'static str,
    pub en: &'static str,
    pub hu: &'static str,
}

impl LocalizedText {
    pub fn get(&self, lang: Language) -> &'static str {
        match lang {
            Language::Pl => self.pl,
            Language::En => self.en,
            Language::Hu => self.hu,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct QuizQuestion {
    pub topic: &'static str,
    pub difficulty: &'static str,
    pub prompt: LocalizedText,
    pub choices: [LocalizedText; 3],
    pub correct: usize,
}

macro_rules! text {
    ($pl:expr, $en:expr, $hu:expr) => {
        LocalizedText { pl: $pl, en: $en, hu: $hu }
    };
}

/// The bundled question bank.
pub static QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        topic: "electricity-magnetism",
        difficulty: "easy",
        prompt: text!(
            "W jakiej jednostce mierzymy natężenie prądu?",
            "What unit measures electric current?",
            "Milyen mértékegységben mérjük az áramerősséget?"
        ),
        choices: [
            text!("Wolt", "Volt", "Volt"),
            text!("Amper", "Ampere", "Amper"),
            text!("Om", "Ohm", "Ohm"),
        ],
        correct: 1,
    },
    QuizQuestion {
        topic: "electricity-magnetism",
        difficulty: "easy",
        prompt: text!(
            "Który materiał najlepiej przewodzi prąd?",
            "Which material conducts electricity best?",
            "Melyik anyag vezeti legjobban az áramot?"
        ),
        choices: [
            text!("Miedź", "Copper", "Réz"),
            text!("Szkło", "Glass", "Üveg"),
            text!("Guma", "Rubber", "Gumi"),
        ],
        correct: 0,
    },
    QuizQuestion {
        topic: "electricity-magnetism",
        difficulty: "medium",
        prompt: text!(
            "Jak szybko dryfują elektrony w przewodzie?",
            "How fast do electrons drift through a wire?",
            "Milyen gyorsan sodródnak az elektronok a vezetékben?"
        ),
        choices: [
            text!(
                "Z prędkością światła",
                "At the speed of light",
                "Fénysebességgel"
            ),
            text!(
                "Kilka metrów na sekundę",
                "A few metres per second",
                "Néhány méter másodpercenként"
            ),
            text!(
                "Ułamki milimetra na sekundę",
                "Fractions of a millimetre per second",
                "A milliméter törtrésze másodpercenként"
            ),
        ],
        correct: 2,
    },
    QuizQuestion {
        topic: "earth-space",
        difficulty: "easy",
        prompt: text!(
            "Która planeta okrąża Słońce najszybciej?",
            "Which planet orbits the Sun fastest?",
            "Melyik bolygó kerüli meg leggyorsabban a Napot?"
        ),
        choices: [
            text!("Merkury", "Mercury", "Merkúr"),
            text!("Ziemia", "Earth", "Föld"),
            text!("Neptun", "Neptune", "Neptunusz"),
        ],
        correct: 0,
    },
    QuizQuestion {
        topic: "earth-space",
        difficulty: "medium",
        prompt: text!(
            "Od czego zależy okres wahadła?",
            "What does a pendulum's period depend on?",
            "Mitől függ az inga lengésideje?"
        ),
        choices: [
            text!(
                "Od długości i przyspieszenia grawitacyjnego",
                "Its length and gravitational acceleration",
                "A hosszától és a gravitációs gyorsulástól"
            ),
            text!("Od masy ciężarka", "The mass of the bob", "A test tömegétől"),
            text!("Od koloru nici", "The colour of the string", "A zsinór színétől"),
        ],
        correct: 0,
    },
    QuizQuestion {
        topic: "microworld",
        difficulty: "easy",
        prompt: text!(
            "Ile elektronów mieści pierwsza powłoka atomu?",
            "How many electrons fit on an atom's first shell?",
            "Hány elektron fér el az atom első héján?"
        ),
        choices: [
            text!("2", "2", "2"),
            text!("8", "8", "8"),
            text!("18", "18", "18"),
        ],
        correct: 0,
    },
    QuizQuestion {
        topic: "microworld",
        difficulty: "medium",
        prompt: text!(
            "Co łączy dwie nici helisy DNA?",
            "What links the two strands of the DNA helix?",
            "Mi köti össze a DNS két szálát?"
        ),
        choices: [
            text!("Pary zasad", "Base pairs", "Bázispárok"),
            text!("Elektrony", "Electrons", "Elektronok"),
            text!("Neutrony", "Neutrons", "Neutronok"),
        ],
        correct: 0,
    },
];

/// Questions for one topic and difficulty.
pub fn questions_for(topic: &str, difficulty: &str) -> Vec<&'static QuizQuestion> {
    QUESTIONS
        .iter()
        .filter(|q| q.topic == topic && q.difficulty == difficulty)
        .collect()
}

/// One run through a set of questions.
pub struct QuizSession {
    topic: String,
    difficulty: String,
    questions: Vec<&'static QuizQuestion>,
    current: usize,
    score: u32,
}

impl QuizSession {
    pub fn new(topic: &str, difficulty: &str) -> QuizSession {
        QuizSession {
            topic: topic.to_string(),
            difficulty: difficulty.to_string(),
            questions: questions_for(topic, difficulty),
            current: 0,
            score: 0,
        }
    }

    pub fn current_question(&self) -> Option<&'static QuizQuestion> {
        self.questions.get(self.current).copied()
    }

    /// Record an answer and advance. Returns whether it was correct;
    /// answering past the end is a no-op.
    pub fn answer(&mut self, choice: usize) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        let correct = choice == question.correct;
        if correct {
            self.score += 1;
        }
        self.current += 1;
        correct
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> u32 {
        self.questions.len() as u32
    }

    /// "Question N of M" in the visitor's language.
    pub fn progress_label(&self, lang: Language) -> String {
        let current = (self.current + 1).min(self.questions.len());
        i18n::translate_with(
            lang,
            "quiz.progress",
            &[
                ("current", current.to_string()),
                ("total", self.questions.len().to_string()),
            ],
        )
    }

    pub fn score_label(&self, lang: Language) -> String {
        i18n::translate_with(
            lang,
            "quiz.score",
            &[
                ("score", self.score.to_string()),
                ("total", self.total().to_string()),
            ],
        )
    }

    /// Turn the finished session into an attempt record.
    pub fn finish(&self, user_id: Option<u64>, completed_at: i64) -> QuizAttemptRecord {
        QuizAttemptRecord {
            user_id,
            topic: self.topic.clone(),
            difficulty: self.difficulty.clone(),
            score: self.score,
            total: self.total(),
            completed_at,
        }
    }
}
