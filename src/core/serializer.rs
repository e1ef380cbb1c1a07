use crate::domain::model::Livery;
use crate::utils::error::{Result, VmrError};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// Renders a flattened rule list as a vPilot-style ModelMatchRuleSet
/// document.
///
/// Every rule becomes a self-closing `<ModelMatchRule/>` element. An
/// attribute is omitted entirely when its source field is empty, never
/// written as `""`. Attribute values are XML-escaped by the writer.
pub fn to_xml(rules: &[Livery]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write(&mut writer, Event::Start(BytesStart::new("ModelMatchRuleSet")))?;

    for rule in rules {
        let mut element = BytesStart::new("ModelMatchRule");
        if !rule.callsign_prefix.is_empty() {
            element.push_attribute(("CallsignPrefix", rule.callsign_prefix.as_str()));
        }
        if !rule.flight_number_range.is_empty() {
            element.push_attribute(("FlightNumberRange", rule.flight_number_range.as_str()));
        }
        if !rule.type_code.is_empty() {
            element.push_attribute(("TypeCode", rule.type_code.as_str()));
        }
        if !rule.model_name.is_empty() {
            element.push_attribute(("ModelName", rule.model_name.as_str()));
        }
        write(&mut writer, Event::Empty(element))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("ModelMatchRuleSet")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| VmrError::Processing {
        message: format!("Serialized rule set is not valid UTF-8: {}", e),
    })
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| VmrError::Processing {
        message: format!("XML write error: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rule_set_has_root_element_only() {
        let xml = to_xml(&[]).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("<ModelMatchRuleSet>"));
        assert!(xml.contains("</ModelMatchRuleSet>"));
        assert!(!xml.contains("ModelMatchRule "));
    }

    #[test]
    fn writes_all_attributes_in_schema_order() {
        let rules = vec![Livery::rule("DAL", "B739", "4439-4858", "Model E")];

        let xml = to_xml(&rules).unwrap();

        assert!(xml.contains(
            "<ModelMatchRule CallsignPrefix=\"DAL\" FlightNumberRange=\"4439-4858\" \
             TypeCode=\"B739\" ModelName=\"Model E\"/>"
        ));
    }

    #[test]
    fn empty_fields_are_omitted_not_written_blank() {
        let rules = vec![Livery::rule("", "C172", "", "Model D")];

        let xml = to_xml(&rules).unwrap();

        assert!(xml.contains("<ModelMatchRule TypeCode=\"C172\" ModelName=\"Model D\"/>"));
        assert!(!xml.contains("CallsignPrefix"));
        assert!(!xml.contains("FlightNumberRange"));
    }

    #[test]
    fn rules_appear_in_input_order() {
        let rules = vec![
            Livery::rule("AIB", "CL60", "", "A//B//C"),
            Livery::rule("", "C172", "", "D"),
            Livery::rule("DAL", "B739", "4439-4858", "E"),
        ];

        let xml = to_xml(&rules).unwrap();

        let first = xml.find("CL60").unwrap();
        let second = xml.find("C172").unwrap();
        let third = xml.find("B739").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn attribute_values_are_escaped() {
        let rules = vec![Livery::rule("AIB", "CL60", "", "Salt & Pepper <1>")];

        let xml = to_xml(&rules).unwrap();

        assert!(xml.contains("ModelName=\"Salt &amp; Pepper &lt;1&gt;\""));
    }

    #[test]
    fn joined_model_names_survive_verbatim() {
        let rules = vec![Livery::rule("AIB", "CL60", "", "A//B//C")];

        let xml = to_xml(&rules).unwrap();

        assert!(xml.contains("ModelName=\"A//B//C\""));
    }
}
