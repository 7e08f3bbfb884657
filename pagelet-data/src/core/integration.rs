use pagelet_toolkit::error::Error;

/* The page seam. Targets are element identifiers; what they resolve to is
 * the integration's business.
 */
pub trait PageletIntegration {
    fn write_fragment(&self, target: &str, html: &str) -> Result<(),Error>;
    fn decorate(&self, target: &str, class: &str) -> Result<(),Error>;
}
