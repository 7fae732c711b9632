//! Client-side behaviour of the rendered widgets.

use ajaxful_rating_core::ForgeryProtection;
use maud::{Markup, PreEscaped, html};

const JQUERY_BEHAVIOUR: &str = r"
$(document).ready(function() {
  $('li > a[class^=stars-]').each(function() {
    $(this).bind('mouseover', function() {
      $(this).closest('.ajaxful-rating-wrapper').next('.ajaxful-rating-chosen-wrapper').find('.ajaxful-rating-chosen').text($(this).attr('title'));
    });
    $(this).bind('mouseout', function() {
      var div = $(this).closest('.ajaxful-rating-wrapper');
      div.next('.ajaxful-rating-chosen-wrapper').find('.ajaxful-rating-chosen').text(div.find('.show-value').attr('title'));
    });
    $(this).bind('click', function() {
      var match = /stars-(\d+)-(\d+)/.exec($(this).attr('class'));
      var width = Math.round((parseFloat(match[1]) / parseFloat(match[2])) * 100);
      $(this).closest('.ajaxful-rating').find('.show-value').css('width', width.toString() + '%');
    });
  });
  $('.ajaxful-rating a').bind('ajax:success', function(status, response) {
    var value = $('#' + response.id + ' .show-value');
    value.css('width', response.width + '%');
    value.attr('title', $('#' + response.id + ' *[class^=stars-' + response.average + ']').attr('title'));
    $('#' + response.id + ' ~ .ajaxful-rating-chosen-wrapper').find('.ajaxful-rating-chosen').text(value.attr('title'));
  });
});
";

const PROTOTYPE_BEHAVIOUR: &str = r"
$$('.ajaxful-rating a').invoke('observe', 'click', function(event) {
  var element = event.findElement('a');
  event.stop();
  new Ajax.Request(element.readAttribute('href'), {
    method: element.readAttribute('data-method') || 'post',
    onSuccess: function(transport) {
      var response = transport.responseJSON;
      if (!response) { return; }
      var value = $(response.id).down('.show-value');
      value.setStyle({ width: response.width + '%' });
    }
  });
});
";

/// JavaScript string literal for `value`, safe to embed in a `<script>` block.
fn js_string(value: &str) -> String {
    let quoted = serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""));
    quoted.replace("</", "<\\/")
}

/// Snippet attaching the anti-forgery token to every asynchronous POST.
fn forgery_snippet(protection: &ForgeryProtection) -> String {
    format!(
        r"
var csrf_param = {param};
var csrf_token = {token};
$(document).ajaxSend(function(event, request, settings) {{
  if (settings.type && settings.type.toLowerCase() == 'post') {{
    settings.data = (settings.data ? settings.data + '&' : '')
      + encodeURIComponent(csrf_param) + '=' + encodeURIComponent(csrf_token);
  }}
}});
",
        param = js_string(protection.param_name()),
        token = js_string(protection.token()),
    )
}

/// The jQuery behaviour script.
///
/// Hovering a star previews its label in the chosen box, clicking it moves the
/// fill indicator, and `ajax:success` responses shaped like
/// `{"id": .., "width": .., "average": ..}` update the widget in place.
#[must_use]
pub fn jquery(protection: Option<&ForgeryProtection>) -> Markup {
    let authenticity = protection.map(forgery_snippet).unwrap_or_default();
    html! {
        script type="text/javascript" {
            (PreEscaped(authenticity))
            (PreEscaped(JQUERY_BEHAVIOUR))
        }
    }
}

/// The Prototype.js behaviour script.
#[must_use]
pub fn prototype() -> Markup {
    html! {
        script type="text/javascript" {
            (PreEscaped(PROTOTYPE_BEHAVIOUR))
        }
    }
}
