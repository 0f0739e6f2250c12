// Application-level error codes shared with API clients.
//
// Clients match on these integers, so the values are part of the wire
// contract and must never be renumbered. Each constant is pinned to an
// explicit value (rather than derived from declaration order) and the block
// is locked down by the test below. 0 is reserved for "no error" and is the
// envelope default; the block starts at 1001 so the two can never collide.

pub const PARAMS_PARSE_ERROR: i32 = 1001;
pub const TOKEN_CHECK_ERROR: i32 = 1002;
pub const USER_CHECK_ERROR: i32 = 1003;
pub const USER_REGISTER_ERROR: i32 = 1004;
pub const USER_LOGIN_ERROR: i32 = 1005;
pub const USER_GET_INFOS_ERROR: i32 = 1006;
pub const USER_UPDATE_INFOS_ERROR: i32 = 1007;
pub const DEMAND_CREATE_ERROR: i32 = 1008;
pub const DEMAND_UPDATE_ERROR: i32 = 1009;
pub const DEMAND_QUERY_ERROR: i32 = 1010;
pub const DEMAND_DELETE_ERROR: i32 = 1011;
pub const SKILL_CREATE_ERROR: i32 = 1012;
pub const SKILL_UPDATE_ERROR: i32 = 1013;
pub const SKILL_QUERY_ERROR: i32 = 1014;
pub const SKILL_DELETE_ERROR: i32 = 1015;
pub const SEND_MAIL_ERROR: i32 = 1016;
pub const SEND_MSG_ERROR: i32 = 1017;
pub const CHECK_MAIL_CAPTCHA_ERROR: i32 = 1018;
pub const CHECK_MSG_CAPTCHA_ERROR: i32 = 1019;
pub const CHECK_MAIL_CAPTCHA_TIMEOUT_ERROR: i32 = 1020;
pub const CHECK_MSG_CAPTCHA_TIMEOUT_ERROR: i32 = 1021;

#[cfg(test)]
mod tests {
    use super::*;

    // Renumbering any of these breaks deployed clients
    #[test]
    fn error_code_block_is_stable() {
        let block = [
            (PARAMS_PARSE_ERROR, 1001),
            (TOKEN_CHECK_ERROR, 1002),
            (USER_CHECK_ERROR, 1003),
            (USER_REGISTER_ERROR, 1004),
            (USER_LOGIN_ERROR, 1005),
            (USER_GET_INFOS_ERROR, 1006),
            (USER_UPDATE_INFOS_ERROR, 1007),
            (DEMAND_CREATE_ERROR, 1008),
            (DEMAND_UPDATE_ERROR, 1009),
            (DEMAND_QUERY_ERROR, 1010),
            (DEMAND_DELETE_ERROR, 1011),
            (SKILL_CREATE_ERROR, 1012),
            (SKILL_UPDATE_ERROR, 1013),
            (SKILL_QUERY_ERROR, 1014),
            (SKILL_DELETE_ERROR, 1015),
            (SEND_MAIL_ERROR, 1016),
            (SEND_MSG_ERROR, 1017),
            (CHECK_MAIL_CAPTCHA_ERROR, 1018),
            (CHECK_MSG_CAPTCHA_ERROR, 1019),
            (CHECK_MAIL_CAPTCHA_TIMEOUT_ERROR, 1020),
            (CHECK_MSG_CAPTCHA_TIMEOUT_ERROR, 1021),
        ];
        for (actual, expected) in block {
            assert_eq!(actual, expected);
        }
    }
}
