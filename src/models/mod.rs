pub mod call;
pub mod room;

pub use call::{CreateCallRequest, CreateCallResponse, ParticipantLinks, PingResponse};
pub use room::{
    CreateRoomPayload, Privacy, ProviderRoom, ProvisionedRoom, RoomProperties, RoomRequest,
};
