use std::sync::Arc;

use crate::database::result_store::ResultSink;
use crate::dto::quiz_dto::QuestionView;
use crate::error::{Error, Result};
use crate::models::question::Question;
use crate::models::quiz::QuizDefinition;
use crate::models::quiz_result::QuizResult;
use crate::services::catalog_service::QuizCatalog;
use crate::services::grading_service::GradingService;
use crate::utils::time;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress { position: usize },
    Completed(QuizResult),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Advanced(Question),
    Finished(QuizResult),
}

#[derive(Debug, Clone)]
struct Attempt {
    quiz_id: String,
    requester_id: String,
}

/// One requester's attempt at one quiz. Not shared between callers.
pub struct QuizSession {
    catalog: Arc<QuizCatalog>,
    sink: Arc<dyn ResultSink>,
    attempt: Option<Attempt>,
    state: SessionState,
    answers: Vec<Option<usize>>,
}

impl QuizSession {
    pub fn new(catalog: Arc<QuizCatalog>, sink: Arc<dyn ResultSink>) -> Self {
        Self {
            catalog,
            sink,
            attempt: None,
            state: SessionState::NotStarted,
            answers: Vec::new(),
        }
    }

    /// Begins (or restarts) an attempt at question 0. On error the session is
    /// left untouched.
    pub fn start(&mut self, quiz_id: &str, requester_id: Option<&str>) -> Result<()> {
        let requester_id = match requester_id.map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                return Err(Error::AuthenticationRequired(
                    "Please log in to take quizzes".to_string(),
                ))
            }
        };
        let quiz = self.catalog.get(quiz_id)?;
        let total = quiz.question_count();

        self.attempt = Some(Attempt {
            quiz_id: quiz_id.to_string(),
            requester_id,
        });
        self.answers.clear();
        self.state = SessionState::InProgress { position: 0 };

        tracing::info!(quiz_id, questions = total, "Quiz session started");
        Ok(())
    }

    /// Starts over with the quiz and requester of the last `start`.
    pub fn retake(&mut self) -> Result<()> {
        let attempt = self.attempt.clone().ok_or_else(|| {
            Error::IllegalState("Cannot retake a quiz that was never started".to_string())
        })?;
        self.start(&attempt.quiz_id, Some(&attempt.requester_id))
    }

    pub fn current_question(&self) -> Result<&Question> {
        let position = self.in_progress_position()?;
        let quiz = self.quiz()?;
        quiz.question(position).ok_or_else(|| {
            Error::Internal(format!(
                "Position {} is outside quiz '{}'",
                position, quiz.id
            ))
        })
    }

    pub fn current_view(&self) -> Result<QuestionView> {
        let question = self.current_question()?;
        Ok(QuestionView::new(self.quiz()?, self.position(), question))
    }

    pub fn submit_answer(&mut self, option_index: usize) -> Result<SubmitOutcome> {
        let position = self.in_progress_position()?;
        let catalog = Arc::clone(&self.catalog);
        let attempt = self
            .attempt
            .clone()
            .ok_or_else(|| Error::Internal("Session in progress without an attempt".to_string()))?;
        let quiz = catalog.get(&attempt.quiz_id)?;
        let question = quiz.question(position).ok_or_else(|| {
            Error::Internal(format!("Position {} is outside quiz '{}'", position, quiz.id))
        })?;

        if !question.has_option(option_index) {
            return Err(Error::InvalidArgument(format!(
                "Option {} does not exist, question {} has {} options",
                option_index,
                position + 1,
                question.options.len()
            )));
        }

        if self.answers.len() <= position {
            self.answers.resize(position + 1, None);
        }
        self.answers[position] = Some(option_index);

        let next = position + 1;
        if next < quiz.question_count() {
            self.state = SessionState::InProgress { position: next };
            return Ok(SubmitOutcome::Advanced(quiz.questions[next].clone()));
        }

        let result = self.grade(quiz, attempt);
        self.state = SessionState::Completed(result.clone());

        tracing::info!(
            quiz_id = %result.quiz_id,
            score = result.score,
            total = result.total,
            percentage = result.percentage,
            "Quiz session completed"
        );

        if let Err(e) = self.sink.append(&result) {
            tracing::error!(error = ?e, quiz_id = %result.quiz_id, "Failed to store quiz result");
        }

        Ok(SubmitOutcome::Finished(result))
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Index of the current question; equals the question count once completed.
    pub fn position(&self) -> usize {
        match &self.state {
            SessionState::NotStarted => 0,
            SessionState::InProgress { position } => *position,
            SessionState::Completed(result) => result.total as usize,
        }
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn result(&self) -> Option<&QuizResult> {
        match &self.state {
            SessionState::Completed(result) => Some(result),
            _ => None,
        }
    }

    pub fn quiz_id(&self) -> Option<&str> {
        self.attempt.as_ref().map(|a| a.quiz_id.as_str())
    }

    pub fn requester_id(&self) -> Option<&str> {
        self.attempt.as_ref().map(|a| a.requester_id.as_str())
    }

    pub fn quiz(&self) -> Result<&QuizDefinition> {
        let attempt = self
            .attempt
            .as_ref()
            .ok_or_else(|| Error::IllegalState("No quiz has been started".to_string()))?;
        self.catalog.get(&attempt.quiz_id)
    }

    fn in_progress_position(&self) -> Result<usize> {
        match &self.state {
            SessionState::InProgress { position } => Ok(*position),
            SessionState::NotStarted => Err(Error::IllegalState(
                "No quiz has been started".to_string(),
            )),
            SessionState::Completed(_) => Err(Error::IllegalState(
                "Quiz is already completed".to_string(),
            )),
        }
    }

    fn grade(&self, quiz: &QuizDefinition, attempt: Attempt) -> QuizResult {
        let score = GradingService::score(&quiz.questions, &self.answers);
        let total = quiz.question_count() as u32;

        QuizResult {
            quiz_id: attempt.quiz_id,
            requester_id: attempt.requester_id,
            score,
            total,
            percentage: GradingService::percentage(score, total),
            completed_at: time::now(),
        }
    }
}
