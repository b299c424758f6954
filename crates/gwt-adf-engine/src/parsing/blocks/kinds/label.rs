/// Labelled paragraph block type (`**Dado que** ...`, `📌 Validações:`).
///
/// The label set comes from the rules; these lines are the only ones routed
/// through the inline formatter.
pub struct Label;

impl Label {
    pub fn opens(trimmed: &str, labels: &[String]) -> bool {
        labels.iter().any(|label| trimmed.starts_with(label.as_str()))
    }
}
