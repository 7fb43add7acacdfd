pub mod info_dto;
