use std::collections::HashMap;

/// Parameter names bound to the path values that matched them.
pub type RouteParams = HashMap<String, String>;

/// A successful resolution: the registered handler plus extracted parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a, H> {
    pub handler: &'a H,
    pub params: RouteParams,
}
