//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    FetchLastMessage {
        recipient_email: String,
    },
    SendEmail {
        recipient_email: String,
        subject: String,
        body: String,
    },
}
