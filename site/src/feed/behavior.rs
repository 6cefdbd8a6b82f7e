//! Client-side behavior
//!
//! The rendered fragments are static markup; this script loads them into
//! their containers, toggles the hover transform/shadow on each card and
//! manages the post modal. Every open appends a fresh overlay; an overlay is
//! removed on a click on its backdrop or close button, or on `Escape`.

use serde::Serialize;
use serde_json::json;

pub const PROJECTS_CONTAINER_ID: &str = "github-projects";
pub const POSTS_CONTAINER_ID: &str = "blog-posts";

pub const PROJECTS_FRAGMENT_PATH: &str = "/fragments/projects";
pub const POSTS_FRAGMENT_PATH: &str = "/fragments/posts";
pub const BEHAVIOR_SCRIPT_PATH: &str = "/assets/feeds.js";

/// Inline style applied to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardStyle {
    pub transform: &'static str,
    pub shadow: &'static str,
}

/// Styles for the hovered and resting states of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HoverStyle {
    pub enter: CardStyle,
    pub leave: CardStyle,
}

pub const PROJECT_CARD_HOVER: HoverStyle = HoverStyle {
    enter: CardStyle {
        transform: "translateY(-10px) scale(1.02)",
        shadow: "0 20px 40px rgba(0,255,136,0.3)",
    },
    leave: CardStyle {
        transform: "translateY(0) scale(1)",
        shadow: "0 10px 20px rgba(0,255,136,0.1)",
    },
};

pub const POST_CARD_HOVER: HoverStyle = HoverStyle {
    enter: CardStyle {
        transform: "translateY(-5px)",
        shadow: "0 15px 30px rgba(0,255,136,0.2)",
    },
    leave: CardStyle {
        transform: "translateY(0)",
        shadow: "0 5px 15px rgba(0,255,136,0.1)",
    },
};

const BEHAVIOR_JS: &str = r#"(function () {
  'use strict';

  function wireHover(selector, hover) {
    document.querySelectorAll(selector).forEach(function (card) {
      card.addEventListener('mouseenter', function () {
        card.style.transform = hover.enter.transform;
        card.style.boxShadow = hover.enter.shadow;
      });
      card.addEventListener('mouseleave', function () {
        card.style.transform = hover.leave.transform;
        card.style.boxShadow = hover.leave.shadow;
      });
    });
  }

  function openPost(slug) {
    fetch(FEEDS_CONFIG.routes.post + encodeURIComponent(slug))
      .then(function (response) {
        if (!response.ok) throw new Error('HTTP ' + response.status);
        return response.text();
      })
      .then(function (markup) {
        var holder = document.createElement('div');
        holder.innerHTML = markup.trim();
        var modal = holder.firstElementChild;
        if (!modal) return;
        document.body.appendChild(modal);

        modal.addEventListener('click', function (e) {
          if (e.target === modal || e.target.classList.contains('close-modal')) {
            modal.remove();
          }
        });

        var escapeHandler = function (e) {
          if (e.key === 'Escape') {
            modal.remove();
            document.removeEventListener('keydown', escapeHandler);
          }
        };
        document.addEventListener('keydown', escapeHandler);
      })
      .catch(function (error) {
        console.warn('Could not open blog post: ' + slug, error);
      });
  }

  function loadInto(containerId, url, onLoaded) {
    var container = document.getElementById(containerId);
    if (!container) return;
    fetch(url)
      .then(function (response) { return response.text(); })
      .then(function (markup) {
        container.innerHTML = markup;
        onLoaded(container);
      })
      .catch(function (error) {
        console.error('Error loading ' + url, error);
      });
  }

  document.addEventListener('DOMContentLoaded', function () {
    loadInto(FEEDS_CONFIG.containers.projects, FEEDS_CONFIG.routes.projects, function () {
      wireHover('.project-card', FEEDS_CONFIG.hover.project);
    });
    loadInto(FEEDS_CONFIG.containers.posts, FEEDS_CONFIG.routes.posts, function (container) {
      wireHover('.blog-post-card', FEEDS_CONFIG.hover.post);
      container.addEventListener('click', function (e) {
        var trigger = e.target.closest('[data-slug]');
        if (!trigger) return;
        e.preventDefault();
        openPost(trigger.dataset.slug);
      });
    });
  });
})();
"#;

/// The behavior script served at [`BEHAVIOR_SCRIPT_PATH`]
pub fn behavior_script() -> String {
    let config = json!({
        "containers": {
            "projects": PROJECTS_CONTAINER_ID,
            "posts": POSTS_CONTAINER_ID,
        },
        "routes": {
            "projects": PROJECTS_FRAGMENT_PATH,
            "posts": POSTS_FRAGMENT_PATH,
            "post": format!("{}/", POSTS_FRAGMENT_PATH),
        },
        "hover": {
            "project": PROJECT_CARD_HOVER,
            "post": POST_CARD_HOVER,
        },
    });

    format!("var FEEDS_CONFIG = {};\n{}", config, BEHAVIOR_JS)
}
