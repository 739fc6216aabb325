use crate::error::QuizError;
use crate::models::{Question, OPTIONS_PER_QUESTION};

type RawQuestion = (&'static str, [&'static str; OPTIONS_PER_QUESTION], &'static str);

const BUILTIN_QUESTIONS: [RawQuestion; 12] = [
    (
        "What chemical element has the atomic number 6?",
        ["Oxygen", "Carbon", "Nitrogen", "Hydrogen"],
        "Carbon",
    ),
    (
        "Which language is primarily used for styling web pages?",
        ["Python", "SQL", "CSS", "JavaScript"],
        "CSS",
    ),
    (
        "The speed of light in a vacuum is approximately:",
        ["300 km/s", "300,000 km/s", "30,000 km/s", "3,000 km/s"],
        "300,000 km/s",
    ),
    (
        "What does HTML stand for?",
        [
            "Hyper Text Markup Language",
            "High Tech Modern Language",
            "Home Tool Management Links",
            "Hyperlink and Text Markup",
        ],
        "Hyper Text Markup Language",
    ),
    (
        "In which year did the Titanic sink?",
        ["1912", "1905", "1923", "1918"],
        "1912",
    ),
    (
        "What is the largest planet in our solar system?",
        ["Mars", "Saturn", "Jupiter", "Uranus"],
        "Jupiter",
    ),
    (
        "Who painted the famous artwork, the Mona Lisa?",
        [
            "Vincent van Gogh",
            "Claude Monet",
            "Pablo Picasso",
            "Leonardo da Vinci",
        ],
        "Leonardo da Vinci",
    ),
    (
        "What is the capital city of Japan?",
        ["Beijing", "Seoul", "Tokyo", "Bangkok"],
        "Tokyo",
    ),
    (
        "Which programming language is commonly used for data science and machine learning?",
        ["C++", "Python", "Java", "Ruby"],
        "Python",
    ),
    (
        "The process by which plants make their own food is called?",
        ["Respiration", "Transpiration", "Photosynthesis", "Germination"],
        "Photosynthesis",
    ),
    (
        "Which is the smallest continent by land area?",
        ["Europe", "Antarctica", "Australia", "South America"],
        "Australia",
    ),
    (
        "What musical term means to play 'very fast'?",
        ["Andante", "Allegro", "Presto", "Largo"],
        "Presto",
    ),
];

/// Read-only, ordered set of questions.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        Ok(Self { questions })
    }

    /// All twelve compiled-in questions.
    pub fn builtin() -> Result<Self, QuizError> {
        Self::builtin_with_count(BUILTIN_QUESTIONS.len())
    }

    /// The first `count` compiled-in questions, capped at the number available.
    pub fn builtin_with_count(count: usize) -> Result<Self, QuizError> {
        let questions = BUILTIN_QUESTIONS
            .iter()
            .take(count)
            .map(|(prompt, options, answer)| Question::new(prompt, *options, answer))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    pub fn get(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions.get(index).ok_or(QuizError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
