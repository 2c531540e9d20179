pub mod adjustment_dto;
pub mod adjustment_list_response;
pub mod adjustment_recorded_response;
pub mod favorite_response;
pub mod list_talents_query;
pub mod record_adjustment_request;
pub mod talent_detail_response;
pub mod talent_dto;
pub mod talent_list_response;
pub mod talent_request;
pub mod talent_response;
pub mod talents;
