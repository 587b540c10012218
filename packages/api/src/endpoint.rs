//! The endpoint catalog.
//!
//! Every operation the client can perform is a variant of [`Endpoint`], which
//! knows its HTTP [`Method`] and path template. Call sites pick an operation
//! and supply its path parameters; they never assemble URLs by hand.

use std::fmt;

/// HTTP methods used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prefix every catalog path is mounted under.
pub const API_BASE: &str = "/api";

/// A logical API operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Ping,
    Demo,
    Test,
    ListUsers,
    GetUser,
    CreateUser,
    UpdateUser,
    DeleteUser,
    ListStudents,
    GetStudent,
    CreateStudent,
    UpdateStudent,
    DeleteStudent,
    ListMoods,
    CreateMood,
    GetMood,
    ListRisks,
    LatestRisk,
    CreateRisk,
    ListChatSessions,
    CreateChatSession,
    ListChatMessages,
    SendChatMessage,
    AnalyticsDashboard,
    AnalyticsTrends,
    AnalyticsReports,
    ListNotifications,
    MarkNotificationRead,
    MarkAllNotificationsRead,
    CrisisContacts,
    CrisisAlert,
    CoachingResources,
    CoachingResource,
}

impl Endpoint {
    pub const ALL: [Endpoint; 33] = [
        Endpoint::Ping,
        Endpoint::Demo,
        Endpoint::Test,
        Endpoint::ListUsers,
        Endpoint::GetUser,
        Endpoint::CreateUser,
        Endpoint::UpdateUser,
        Endpoint::DeleteUser,
        Endpoint::ListStudents,
        Endpoint::GetStudent,
        Endpoint::CreateStudent,
        Endpoint::UpdateStudent,
        Endpoint::DeleteStudent,
        Endpoint::ListMoods,
        Endpoint::CreateMood,
        Endpoint::GetMood,
        Endpoint::ListRisks,
        Endpoint::LatestRisk,
        Endpoint::CreateRisk,
        Endpoint::ListChatSessions,
        Endpoint::CreateChatSession,
        Endpoint::ListChatMessages,
        Endpoint::SendChatMessage,
        Endpoint::AnalyticsDashboard,
        Endpoint::AnalyticsTrends,
        Endpoint::AnalyticsReports,
        Endpoint::ListNotifications,
        Endpoint::MarkNotificationRead,
        Endpoint::MarkAllNotificationsRead,
        Endpoint::CrisisContacts,
        Endpoint::CrisisAlert,
        Endpoint::CoachingResources,
        Endpoint::CoachingResource,
    ];

    pub fn method(self) -> Method {
        use Endpoint::*;
        match self {
            Ping | Demo | ListUsers | GetUser | ListStudents | GetStudent | ListMoods | GetMood
            | ListRisks | LatestRisk | ListChatSessions | ListChatMessages
            | AnalyticsDashboard | AnalyticsTrends | AnalyticsReports | ListNotifications
            | CrisisContacts | CoachingResources | CoachingResource => Method::Get,
            Test | CreateUser | CreateStudent | CreateMood | CreateRisk | CreateChatSession
            | SendChatMessage | CrisisAlert => Method::Post,
            UpdateUser | UpdateStudent => Method::Put,
            MarkNotificationRead | MarkAllNotificationsRead => Method::Patch,
            DeleteUser | DeleteStudent => Method::Delete,
        }
    }

    /// Path template relative to [`API_BASE`]. Placeholders are `{name}`.
    pub fn template(self) -> &'static str {
        use Endpoint::*;
        match self {
            Ping => "/ping",
            Demo => "/demo",
            Test => "/test",
            ListUsers | CreateUser => "/users",
            GetUser | UpdateUser | DeleteUser => "/users/{id}",
            ListStudents | CreateStudent => "/students",
            GetStudent | UpdateStudent | DeleteStudent => "/students/{id}",
            ListMoods | CreateMood => "/students/{student_id}/moods",
            GetMood => "/students/{student_id}/moods/{mood_id}",
            ListRisks | CreateRisk => "/students/{student_id}/risks",
            LatestRisk => "/students/{student_id}/risks/latest",
            ListChatSessions | CreateChatSession => "/students/{student_id}/chat/sessions",
            ListChatMessages | SendChatMessage => "/chat/sessions/{session_id}/messages",
            AnalyticsDashboard => "/analytics/dashboard/{student_id}",
            AnalyticsTrends => "/analytics/trends/{student_id}",
            AnalyticsReports => "/analytics/reports/{student_id}",
            ListNotifications => "/notifications",
            MarkNotificationRead => "/notifications/{id}/read",
            MarkAllNotificationsRead => "/notifications/read-all",
            CrisisContacts => "/crisis/contacts",
            CrisisAlert => "/crisis/alert",
            CoachingResources => "/coaching/resources",
            CoachingResource => "/coaching/resources/{id}",
        }
    }

    /// Names of the template's placeholders, in order.
    pub fn params(self) -> Vec<&'static str> {
        segments(self.template())
            .filter_map(|s| s.strip_prefix('{').and_then(|s| s.strip_suffix('}')))
            .collect()
    }

    /// Render the path, substituting `params` into the placeholders in order.
    ///
    /// Each parameter is percent-encoded, so an id containing `/` or `?`
    /// stays inside its own segment.
    pub fn path(self, params: &[&str]) -> Result<String, PathError> {
        let expected = self.params().len();
        if params.len() != expected {
            return Err(PathError {
                endpoint: self,
                expected,
                got: params.len(),
            });
        }

        let mut values = params.iter();
        let mut out = String::new();
        for segment in segments(self.template()) {
            out.push('/');
            if segment.starts_with('{') {
                // Counts were checked above.
                if let Some(value) = values.next() {
                    out.push_str(&urlencoding::encode(value));
                }
            } else {
                out.push_str(segment);
            }
        }
        Ok(out)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.template())
    }
}

fn segments(template: &'static str) -> impl Iterator<Item = &'static str> {
    template.split('/').filter(|s| !s.is_empty())
}

/// The wrong number of path parameters was supplied for an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{endpoint} expects {expected} path parameter(s), got {got}")]
pub struct PathError {
    pub endpoint: Endpoint,
    pub expected: usize,
    pub got: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_placeholders_in_order() {
        assert_eq!(
            Endpoint::GetMood.path(&["s-1", "m-2"]).unwrap(),
            "/students/s-1/moods/m-2"
        );
        assert_eq!(Endpoint::Ping.path(&[]).unwrap(), "/ping");
    }

    #[test]
    fn parameters_are_percent_encoded() {
        assert_eq!(
            Endpoint::GetStudent.path(&["a/b?c"]).unwrap(),
            "/students/a%2Fb%3Fc"
        );
    }

    #[test]
    fn wrong_parameter_count_rejected() {
        let err = Endpoint::CreateMood.path(&[]).unwrap_err();
        assert_eq!(err.expected, 1);
        assert_eq!(err.got, 0);
        assert!(Endpoint::Ping.path(&["extra"]).is_err());
    }

    #[test]
    fn params_lists_placeholder_names() {
        assert_eq!(Endpoint::GetMood.params(), ["student_id", "mood_id"]);
        assert!(Endpoint::ListNotifications.params().is_empty());
    }

    #[test]
    fn catalog_methods() {
        assert_eq!(Endpoint::CreateMood.method(), Method::Post);
        assert_eq!(Endpoint::UpdateStudent.method(), Method::Put);
        assert_eq!(Endpoint::MarkAllNotificationsRead.method(), Method::Patch);
        assert_eq!(Endpoint::DeleteUser.method(), Method::Delete);
        assert_eq!(Endpoint::LatestRisk.method(), Method::Get);
    }

    #[test]
    fn every_template_is_rooted() {
        for e in Endpoint::ALL {
            assert!(e.template().starts_with('/'), "{e:?}");
        }
    }
}
