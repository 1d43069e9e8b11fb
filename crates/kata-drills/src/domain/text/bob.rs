//! Bob, a lackadaisical teenager with five possible answers

/// Bob's answer to a remark
pub fn response(remark: &str) -> &'static str {
    let remark = remark.trim();

    if remark.is_empty() {
        return "Fine. Be that way!";
    }

    let question = remark.ends_with('?');
    match (is_yelling(remark), question) {
        (true, true) => "Calm down, I know what I'm doing!",
        (true, false) => "Whoa, chill out!",
        (false, true) => "Sure.",
        (false, false) => "Whatever.",
    }
}

/// At least one cased letter and no lowercase ones
fn is_yelling(remark: &str) -> bool {
    remark.chars().any(char::is_uppercase) && !remark.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement() {
        assert_eq!(response("Tom-ay-to, tom-aaaah-to."), "Whatever.");
    }

    #[test]
    fn test_shouting() {
        assert_eq!(response("WATCH OUT!"), "Whoa, chill out!");
        assert_eq!(response("1, 2, 3 GO!"), "Whoa, chill out!");
    }

    #[test]
    fn test_question() {
        assert_eq!(response("Does this cryogenic chamber make me look fat?"), "Sure.");
        assert_eq!(response("4?"), "Sure.");
    }

    #[test]
    fn test_forceful_question() {
        assert_eq!(response("WHAT'S GOING ON?"), "Calm down, I know what I'm doing!");
    }

    #[test]
    fn test_silence() {
        assert_eq!(response(""), "Fine. Be that way!");
        assert_eq!(response("  \t\n "), "Fine. Be that way!");
    }

    #[test]
    fn test_numbers_only_is_not_yelling() {
        assert_eq!(response("1, 2, 3"), "Whatever.");
    }

    #[test]
    fn test_trailing_whitespace_question() {
        assert_eq!(response("Okay if like my  spacebar  quite a bit?   "), "Sure.");
    }
}
