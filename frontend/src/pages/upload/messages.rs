pub enum Msg {
    /// File chosen through the picker, by name.
    FileSelected(String),
    DragOver,
    DragLeave,
    /// `(name, mime type)` of the first dropped file, if any.
    Dropped(Option<(String, String)>),
    SetCertificateId(String),
    LoadDemo,
    Submit,
    /// Simulated verification finished; go to the result route.
    Navigate(&'static str),
}
