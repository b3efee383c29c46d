use woothee::parser::Parser;

pub struct WootheeEngine {
    parser: Parser,
}

impl WootheeEngine {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
        }
    }

    pub fn is_bot(&self, ua: &str) -> bool {
        let Some(result) = self.parser.parse(ua) else {
            return false;
        };

        result.category == "crawler"
    }
}
