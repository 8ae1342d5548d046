mod assessment;
mod category;
mod favorites;
mod ids;
mod progress;
mod question;
mod resource;
mod section;
mod takeaway;

pub use assessment::{AssessmentPrompt, CommunicationExercise};
pub use category::{Category, CategoryFilter};
pub use favorites::FavoritesState;
pub use ids::{ParseIdError, QuestionId, ResourceId, TakeawayId};
pub use progress::{AnsweredRecord, ProgressState};
pub use question::QuizQuestion;
pub use resource::ResourceEntry;
pub use section::{BookOverview, BookSection, BookSummary};
pub use takeaway::Takeaway;
