use pagelet_data::PageletIntegration;
use pagelet_toolkit::error::Error;
use pagelet_toolkit::js::dommanip::{ add_class, base_href, element_by_id, set_inner_html };

/* The DOM-backed side of the page seam. Targets are element ids, matching
 * the markup convention of the embedding pages.
 */
pub(crate) struct DomIntegration;

impl DomIntegration {
    pub(crate) fn new() -> DomIntegration { DomIntegration }
}

impl PageletIntegration for DomIntegration {
    fn write_fragment(&self, target: &str, html: &str) -> Result<(),Error> {
        let element = Error::oper_r(element_by_id(target),"cannot find target")?;
        set_inner_html(&element,html);
        Ok(())
    }

    fn decorate(&self, target: &str, class: &str) -> Result<(),Error> {
        let element = Error::oper_r(element_by_id(target),"cannot find target")?;
        Error::oper_r(add_class(&element,class),"cannot decorate target")
    }
}

pub(crate) fn page_base_url() -> Option<String> {
    base_href().ok().flatten()
}
