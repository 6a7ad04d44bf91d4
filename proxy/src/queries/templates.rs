use serde::Serialize;
use serde_json::Value;

const GET_ITEM_QUERY: &str = r#"query getItem ($itemId: String!) {
  getItem (itemId: $itemId) {
    body {
      itemId
      batchId
      metadata
      metadataHash
      blockchainName
      blockchainNetwork
      contractAddress
      mintTransaction {
        status
        hash
        itemIndex
      }
    }
    status {
      success
      message
    }
  }
}"#;

const LIST_MEMORIES_BY_ITEM_ID_QUERY: &str = r#"query listMemoriesByItemId ($itemId: String!) {
  listMemoriesByItemId (itemId: $itemId) {
    body {
      memoryId
      batchId
      metadata
      metadataHash
      blockchainName
      blockchainNetwork
      contractAddress
      mintTransaction {
        status
        hash
      }
    }
    status {
      success
      message
    }
  }
}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLOperation {
    GetItem,
    ListMemoriesByItemId,
}

impl GraphQLOperation {
    /// Key of this operation's payload inside the response `data` envelope.
    pub fn name(&self) -> &'static str {
        match self {
            GraphQLOperation::GetItem => "getItem",
            GraphQLOperation::ListMemoriesByItemId => "listMemoriesByItemId",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            GraphQLOperation::GetItem => "items",
            GraphQLOperation::ListMemoriesByItemId => "memories",
        }
    }

    pub fn query(&self) -> &'static str {
        match self {
            GraphQLOperation::GetItem => GET_ITEM_QUERY,
            GraphQLOperation::ListMemoriesByItemId => LIST_MEMORIES_BY_ITEM_ID_QUERY,
        }
    }

    pub fn request(&self, item_id: Value) -> GraphQLRequest {
        GraphQLRequest {
            query: self.query(),
            variables: ItemVariables { item_id },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GraphQLRequest {
    pub query: &'static str,
    pub variables: ItemVariables,
}

#[derive(Debug, Serialize)]
pub struct ItemVariables {
    #[serde(rename = "itemId")]
    pub item_id: Value,
}
