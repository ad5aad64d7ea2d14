use super::definition::{ENTRY_QUESTION_ID, Form, Question};
use ahash::AHashMap;

/// An immutable, indexed snapshot of a loaded form.
///
/// Lookups are by question id. When a form carries duplicate ids the first
/// occurrence in document order wins.
#[derive(Debug, Clone, Default)]
pub struct QuestionGraph {
    title: String,
    questions: Vec<Question>,
    // Key: question id, Value: position in `questions`
    index: AHashMap<i32, usize>,
}

impl QuestionGraph {
    pub fn new(form: Form) -> Self {
        let mut index = AHashMap::with_capacity(form.questions.len());
        for (position, question) in form.questions.iter().enumerate() {
            index.entry(question.id).or_insert(position);
        }

        Self {
            title: form.title,
            questions: form.questions,
            index,
        }
    }

    /// A graph with no questions. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn find(&self, id: i32) -> Option<&Question> {
        self.index.get(&id).map(|&position| &self.questions[position])
    }

    /// The conventional entry question (`id == 0`), if the form has one.
    pub fn entry(&self) -> Option<&Question> {
        self.find(ENTRY_QUESTION_ID)
    }

    /// The question that follows `id` in document order. This is the default
    /// route for free-text answers and options without a destination.
    pub fn next_in_order(&self, id: i32) -> Option<&Question> {
        self.index
            .get(&id)
            .and_then(|&position| self.questions.get(position + 1))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl From<Form> for QuestionGraph {
    fn from(form: Form) -> Self {
        Self::new(form)
    }
}

impl From<Vec<Question>> for QuestionGraph {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(Form {
            title: String::new(),
            questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_duplicate_wins() {
        let graph = QuestionGraph::from(vec![
            Question::new(0, "First", "text"),
            Question::new(0, "Shadowed", "text"),
            Question::new(1, "Second", "text"),
        ]);

        assert_eq!(graph.find(0).map(|q| q.text.as_str()), Some("First"));
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn next_in_order_follows_document_position() {
        let graph = QuestionGraph::from(vec![
            Question::new(0, "A", "text"),
            Question::new(7, "B", "text"),
            Question::new(3, "C", "end"),
        ]);

        assert_eq!(graph.next_in_order(0).map(|q| q.id), Some(7));
        assert_eq!(graph.next_in_order(7).map(|q| q.id), Some(3));
        assert!(graph.next_in_order(3).is_none());
        assert!(graph.next_in_order(42).is_none());
    }
}
