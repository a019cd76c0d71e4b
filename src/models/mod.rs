// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AnswerMap, Category, HealthWeights, HomeServicesWeights, ProfessionalWeights, Provider,
    ProvidersByCategory, RealEstateWeights, RestaurantWeights, ScoredProvider, ScoringWeights,
};
pub use requests::RankProvidersRequest;
pub use responses::{CategoriesResponse, ErrorResponse, HealthResponse, RankProvidersResponse};
