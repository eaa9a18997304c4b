#[derive(Debug, Eq, PartialEq)]
pub struct EchoRequest {
    pub text: String,
}

#[derive(Debug, Eq, PartialEq, courier_macro::ResponseVariants)]
pub struct EchoResponse {
    pub echoed: String,
    pub answered_by: String,
}

#[derive(Debug, Eq, PartialEq)]
pub struct EchoFault {
    pub code: String,
}
